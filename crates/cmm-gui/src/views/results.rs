//! Prediction results: the horizon summary, the incidence chart, and the
//! inline error line.

use egui::{Align2, FontId, Rect, RichText, Sense, Stroke, Ui, pos2, vec2};

use cmm_report::IncidenceChart;

use crate::state::AppState;
use crate::theme::{colors, spacing};

/// Results section view
pub struct ResultsView;

impl ResultsView {
    pub fn show(ui: &mut Ui, state: &AppState) {
        if let Some(error) = &state.error {
            ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
            return;
        }
        let Some(outcome) = &state.outcome else {
            return;
        };

        ui.heading(
            RichText::new(format!(
                "{} Cumulative incidence probability",
                egui_phosphor::regular::CHART_BAR
            ))
            .size(20.0),
        );
        ui.add_space(spacing::SM);
        for row in &outcome.summary.rows {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{}-year incidence probability:", row.years)).strong(),
                );
                ui.label(row.percent_label());
            });
        }

        ui.add_space(spacing::LG);
        ui.heading(
            RichText::new(format!(
                "{} Time to incidence",
                egui_phosphor::regular::CHART_LINE_UP
            ))
            .size(20.0),
        );
        ui.add_space(spacing::SM);
        draw_chart(ui, &outcome.chart);
    }
}

/// Paint the incidence curve with its horizon markers.
///
/// The vertical scale is the chart model's fixed [0, 1] range, never the
/// data extent.
fn draw_chart(ui: &mut Ui, chart: &IncidenceChart) {
    let width = ui.available_width().clamp(320.0, 680.0);
    let (response, painter) = ui.allocate_painter(vec2(width, 400.0), Sense::hover());
    let frame_rect = response.rect;

    // Plot area inside the axis margins.
    let plot = Rect::from_min_max(
        frame_rect.min + vec2(56.0, 30.0),
        frame_rect.max - vec2(16.0, 44.0),
    );

    let (y_min, y_max) = chart.y_range;
    let x_max = chart.max_time().max(1.0);
    let to_screen = |time: f64, incidence: f64| {
        pos2(
            plot.left() + ((time / x_max) as f32) * plot.width(),
            plot.bottom() - (((incidence - y_min) / (y_max - y_min)) as f32) * plot.height(),
        )
    };

    let text_color = ui.visuals().text_color();
    let grid_stroke = Stroke::new(0.5, colors::GRID);

    painter.text(
        pos2(plot.center().x, frame_rect.top() + 12.0),
        Align2::CENTER_CENTER,
        chart.title,
        FontId::proportional(15.0),
        ui.visuals().strong_text_color(),
    );

    // Horizontal gridlines with y tick labels every 0.2.
    for tick in 0..=5 {
        let value = f64::from(tick) * 0.2;
        let at = to_screen(0.0, value);
        painter.line_segment(
            [pos2(plot.left(), at.y), pos2(plot.right(), at.y)],
            grid_stroke,
        );
        painter.text(
            pos2(plot.left() - 8.0, at.y),
            Align2::RIGHT_CENTER,
            format!("{value:.1}"),
            FontId::proportional(11.0),
            text_color,
        );
    }

    // Vertical gridlines with year tick labels.
    let year_step = if x_max > 12.0 { 2 } else { 1 };
    for year in (0..=(x_max.ceil() as usize)).step_by(year_step) {
        let at = to_screen(year as f64, y_min);
        painter.line_segment([pos2(at.x, plot.top()), pos2(at.x, plot.bottom())], grid_stroke);
        painter.text(
            pos2(at.x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            year.to_string(),
            FontId::proportional(11.0),
            text_color,
        );
    }

    // Axes over the gridlines.
    let axis_stroke = Stroke::new(1.0, text_color);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis_stroke);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis_stroke);

    painter.text(
        pos2(plot.center().x, frame_rect.bottom() - 10.0),
        Align2::CENTER_CENTER,
        chart.x_label,
        FontId::proportional(12.0),
        text_color,
    );
    // Rotated y-axis caption.
    let galley = painter.layout_no_wrap(
        chart.y_label.to_string(),
        FontId::proportional(12.0),
        text_color,
    );
    let mut y_caption = egui::epaint::TextShape::new(
        pos2(
            frame_rect.left() + 6.0,
            plot.center().y + galley.size().x / 2.0,
        ),
        galley,
        text_color,
    );
    y_caption.angle = -std::f32::consts::FRAC_PI_2;
    painter.add(y_caption);

    // The curve itself.
    let curve_stroke = Stroke::new(1.5, colors::CURVE);
    for pair in chart.points.windows(2) {
        painter.line_segment(
            [to_screen(pair[0].0, pair[0].1), to_screen(pair[1].0, pair[1].1)],
            curve_stroke,
        );
    }

    // Horizon markers with their offset annotations.
    for marker in &chart.markers {
        let at = to_screen(marker.years, marker.incidence);
        let label_at = to_screen(marker.label_at.0, marker.label_at.1);
        painter.arrow(label_at, (at - label_at) * 0.8, Stroke::new(1.0, text_color));
        painter.circle_filled(at, 3.0, colors::MARKER);
        painter.text(
            label_at,
            Align2::LEFT_BOTTOM,
            &marker.label,
            FontId::proportional(11.0),
            text_color,
        );
    }
}
