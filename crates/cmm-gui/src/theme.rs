//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Chart palette not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Curve stroke (accent blue)
    pub const CURVE: Color32 = Color32::from_rgb(0x00, 0xA3, 0xFE);

    /// Horizon marker dots (red)
    pub const MARKER: Color32 = Color32::from_rgb(220, 38, 38);

    /// Light gridlines
    pub const GRID: Color32 = Color32::from_gray(190);
}
