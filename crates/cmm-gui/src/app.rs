//! Main application struct and eframe::App implementation

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;

use cmm_survival::SurvivalForest;

use crate::state::AppState;
use crate::theme::spacing;
use crate::views::{FormView, ResultsView};

/// Main application struct
pub struct CmmApp {
    state: AppState,
}

impl CmmApp {
    /// Create a new application instance around the loaded model.
    pub fn new(cc: &eframe::CreationContext<'_>, model: SurvivalForest) -> Result<Self> {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Ok(Self {
            state: AppState::new(Arc::new(model))?,
        })
    }
}

impl eframe::App for CmmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(spacing::MD);
                ui.heading(
                    egui::RichText::new(format!(
                        "{} CMM Prediction Model",
                        egui_phosphor::regular::HEARTBEAT
                    ))
                    .size(28.0),
                );
                ui.add_space(spacing::LG);

                FormView::show(ui, &mut self.state.form);

                ui.add_space(spacing::LG);
                if ui
                    .button(egui::RichText::new("Predict CMM").size(16.0))
                    .clicked()
                {
                    self.state.run_prediction();
                }

                ui.add_space(spacing::LG);
                ResultsView::show(ui, &self.state);
                ui.add_space(spacing::XL);
            });
        });
    }
}
