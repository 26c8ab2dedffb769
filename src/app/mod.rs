//! `LandingApp` — the top-level egui application state.
//!
//! This module declares the `LandingApp` struct and its `Default` impl.
//! The work happens in the sibling sub-modules:
//!
//! - `emblem` — the animated vault-emblem viewport (render + input)
//! - `page`   — section layout, copy, and reveal wiring

pub mod emblem;
pub mod page;

use eframe::egui;

use accrueflow_landing::ui::form::IntakeForm;
use accrueflow_landing::ui::reveal::Reveal;
use accrueflow_landing::ui::Palette;

use crate::app::emblem::EmblemView;

pub struct LandingApp {
    pub palette: Palette,
    pub emblem: EmblemView,
    pub form: IntakeForm,
    // One reveal per section / card, staggered like the reference page.
    pub reveal_hero: Reveal,
    pub reveal_hero_visual: Reveal,
    pub reveal_signals_head: Reveal,
    pub reveal_signals: Vec<Reveal>,
    pub reveal_pillars: Vec<Reveal>,
    pub reveal_timeline_head: Reveal,
    pub reveal_timeline: Vec<Reveal>,
    pub reveal_intake_brief: Reveal,
    pub reveal_intake_form: Reveal,
}

impl Default for LandingApp {
    fn default() -> Self {
        Self {
            palette: Palette::dark(),
            emblem: EmblemView::new(),
            form: IntakeForm::default(),
            reveal_hero: Reveal::new(0.0),
            reveal_hero_visual: Reveal::new(0.12),
            reveal_signals_head: Reveal::new(0.0),
            reveal_signals: (0..3).map(|i| Reveal::new(i as f32 * 0.08)).collect(),
            reveal_pillars: (0..3).map(|i| Reveal::new(i as f32 * 0.12)).collect(),
            reveal_timeline_head: Reveal::new(0.0),
            reveal_timeline: (0..4).map(|i| Reveal::new(i as f32 * 0.1)).collect(),
            reveal_intake_brief: Reveal::new(0.0),
            reveal_intake_form: Reveal::new(0.08),
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let page_bg = self.palette.page_bg;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(page_bg))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        page::show(self, ui);
                    });
            });
    }
}
