//! Shared egui helpers for the landing page.
//!
//! Stateless text/section helpers plus the page palette. The stateful
//! widgets live in the sub-modules: `reveal` (one-shot scroll transitions)
//! and `form` (the secure-intake mockup).

pub mod form;
pub mod reveal;

use egui::{Color32, RichText, Stroke};

/// Fixed dark palette of the page.
pub struct Palette {
    pub page_bg: Color32,
    pub card_bg: Color32,
    pub card_stroke: Color32,
    pub heading: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            page_bg: Color32::from_rgb(2, 3, 10),
            card_bg: Color32::from_rgb(13, 18, 36),
            card_stroke: Color32::from_rgb(42, 52, 86),
            heading: Color32::from_rgb(233, 238, 252),
            text: Color32::from_rgb(196, 205, 229),
            muted: Color32::from_rgb(124, 135, 168),
            accent: Color32::from_rgb(117, 166, 255),
        }
    }
}

/// Small uppercase accent line above a section heading.
pub fn eyebrow(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(12.0)
            .color(palette.accent)
            .strong(),
    );
    ui.add_space(6.0);
}

pub fn section_title(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(RichText::new(text).size(30.0).color(palette.heading).strong());
    ui.add_space(8.0);
}

pub fn lede(ui: &mut egui::Ui, palette: &Palette, text: &str) {
    ui.label(RichText::new(text).size(15.0).color(palette.muted));
    ui.add_space(12.0);
}

/// Card frame used across the signal/pillar/timeline grids.
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.card_bg)
        .stroke(Stroke::new(1.0, palette.card_stroke))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
}
