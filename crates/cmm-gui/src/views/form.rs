//! The covariate form.
//!
//! One control per schema feature, laid out in two columns alternating by
//! schema position. Binary covariates get a combo box showing display
//! labels; continuous ones a drag value clamped to the configured range,
//! so out-of-range entry is impossible by construction.

use egui::{ComboBox, DragValue, RichText, Ui};

use cmm_model::CovariateKind;

use crate::state::{FieldValue, FormField, FormState};
use crate::theme::spacing;

/// Covariate form view
pub struct FormView;

impl FormView {
    pub fn show(ui: &mut Ui, form: &mut FormState) {
        ui.columns(2, |columns| {
            for (index, field) in form.fields.iter_mut().enumerate() {
                let column = &mut columns[index % 2];
                Self::field(column, field);
                column.add_space(spacing::MD);
            }
        });
    }

    fn field(ui: &mut Ui, field: &mut FormField) {
        ui.label(RichText::new(field.spec.label).strong());
        ui.add_space(spacing::XS);

        match (&field.spec.kind, &mut field.value) {
            (CovariateKind::Binary { .. }, FieldValue::Choice(choice)) => {
                let selected = field.spec.binary_label(*choice).unwrap_or_default();
                ComboBox::from_id_salt(field.spec.name)
                    .width(160.0)
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for code in [0, 1] {
                            if let Some(label) = field.spec.binary_label(code) {
                                ui.selectable_value(choice, code, label);
                            }
                        }
                    });
            }
            (
                CovariateKind::Continuous { min, max, step, .. },
                FieldValue::Number(number),
            ) => {
                ui.add(
                    DragValue::new(number)
                        .range(*min..=*max)
                        .speed(*step)
                        .fixed_decimals(if *step < 1.0 { 1 } else { 0 }),
                );
            }
            // The form is built from the specs, so kind and value always
            // agree.
            _ => {}
        }
    }
}
