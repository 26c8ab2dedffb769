//! Secure-intake form mockup.
//!
//! Controlled inputs only: field values live here, the sensitivity band is
//! a single-select over [`content::BANDS`], and the CTA submits nothing.
//! Focus tracking highlights the active field label.

use eframe::egui;
use egui::RichText;

use crate::content::{self, Field, FieldKind};
use crate::ui::{card_frame, Palette};

pub struct IntakeForm {
    identity: String,
    organization: String,
    objective: String,
    channels: String,
    /// Index into [`content::BANDS`].
    band: usize,
    active: &'static str,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            identity: String::new(),
            organization: String::new(),
            objective: String::new(),
            channels: String::new(),
            band: 1,
            active: content::FIELDS[0].id,
        }
    }
}

impl IntakeForm {
    pub fn band(&self) -> &'static str {
        content::BANDS[self.band]
    }

    pub fn active_field(&self) -> &'static str {
        self.active
    }

    fn value_mut(&mut self, id: &str) -> Option<&mut String> {
        match id {
            "identity" => Some(&mut self.identity),
            "organization" => Some(&mut self.organization),
            "objective" => Some(&mut self.objective),
            "channels" => Some(&mut self.channels),
            _ => None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        card_frame(palette).show(ui, |ui| {
            // Header
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(content::FORM_TAGLINE)
                            .size(12.0)
                            .color(palette.accent),
                    );
                    ui.label(
                        RichText::new(content::FORM_TITLE)
                            .size(20.0)
                            .color(palette.heading)
                            .strong(),
                    );
                    ui.label(RichText::new(content::FORM_LEDE).size(13.0).color(palette.muted));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    card_frame(palette).show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(content::FORM_BADGE_TOP)
                                    .size(11.0)
                                    .color(palette.muted),
                            );
                            ui.label(
                                RichText::new(content::FORM_BADGE_MAIN)
                                    .size(13.0)
                                    .color(palette.heading)
                                    .strong(),
                            );
                        });
                    });
                });
            });
            ui.add_space(14.0);

            for field in content::FIELDS {
                self.field_row(ui, palette, field);
                ui.add_space(10.0);
            }

            ui.add_space(4.0);
            let cta = egui::Button::new(
                RichText::new(content::FORM_CTA).size(15.0).strong().color(palette.page_bg),
            )
            .fill(palette.accent)
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(ui.available_width(), 40.0));
            // Mockup: the CTA is wired to nothing.
            let _ = ui.add(cta);

            ui.add_space(8.0);
            ui.label(RichText::new(content::FORM_FOOTNOTE).size(12.0).color(palette.muted));
        });
    }

    fn field_row(&mut self, ui: &mut egui::Ui, palette: &Palette, field: &Field) {
        let label_color = if self.active == field.id {
            palette.accent
        } else {
            palette.text
        };
        ui.label(RichText::new(field.label).size(13.0).color(label_color));
        ui.add_space(4.0);

        match field.kind {
            FieldKind::Select => {
                let selected = self.band;
                let response = egui::ComboBox::from_id_salt(field.id)
                    .width(ui.available_width())
                    .selected_text(content::BANDS[selected])
                    .show_ui(ui, |ui| {
                        for (i, band) in content::BANDS.iter().enumerate() {
                            ui.selectable_value(&mut self.band, i, *band);
                        }
                    })
                    .response;
                if response.clicked() || response.has_focus() {
                    self.active = field.id;
                }
            }
            FieldKind::Text | FieldKind::Multiline => {
                if let Some(value) = self.value_mut(field.id) {
                    let edit = match field.kind {
                        FieldKind::Multiline => egui::TextEdit::multiline(value)
                            .desired_rows(3)
                            .hint_text(field.placeholder),
                        _ => egui::TextEdit::singleline(value).hint_text(field.placeholder),
                    }
                    .desired_width(f32::INFINITY);
                    let response = ui.add(edit);
                    if response.gained_focus() || response.has_focus() {
                        self.active = field.id;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sensitivity_bands() {
        assert_eq!(content::BANDS.len(), 4);
    }

    #[test]
    fn defaults_to_executive_distribution() {
        let form = IntakeForm::default();
        assert_eq!(form.band(), "Tier 1 — Executive Distribution");
        assert_eq!(form.active_field(), "identity");
    }

    #[test]
    fn every_text_field_has_storage() {
        let mut form = IntakeForm::default();
        for field in content::FIELDS {
            match field.kind {
                FieldKind::Select => assert!(form.value_mut(field.id).is_none()),
                _ => {
                    let v = form.value_mut(field.id).expect("text field storage");
                    v.push_str("x");
                }
            }
        }
        assert_eq!(form.identity, "x");
        assert_eq!(form.channels, "x");
    }
}
