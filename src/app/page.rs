//! Section layout for the landing page.
//!
//! Pure composition: every string comes from `content`, every transition
//! from `ui::reveal`, and the emblem from `app::emblem`. Sections stack
//! vertically inside one scroll area, centered at a fixed content width.

use eframe::egui;
use egui::RichText;

use accrueflow_landing::content;
use accrueflow_landing::ui::{card_frame, eyebrow, lede, section_title, Palette};

use crate::app::LandingApp;

const CONTENT_WIDTH: f32 = 1100.0;
const SECTION_GAP: f32 = 72.0;
const EMBLEM_HEIGHT: f32 = 380.0;

pub fn show(app: &mut LandingApp, ui: &mut egui::Ui) {
    let LandingApp {
        palette,
        emblem,
        form,
        reveal_hero,
        reveal_hero_visual,
        reveal_signals_head,
        reveal_signals,
        reveal_pillars,
        reveal_timeline_head,
        reveal_timeline,
        reveal_intake_brief,
        reveal_intake_form,
    } = app;

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        ui.add_space(24.0);

        nav(ui, palette);
        ui.add_space(40.0);

        // ── Hero ──
        ui.columns(2, |cols| {
            reveal_hero.show(&mut cols[0], |ui| hero_copy(ui, palette));
            reveal_hero_visual.show(&mut cols[1], |ui| {
                emblem.ui(ui, EMBLEM_HEIGHT);
                ui.add_space(10.0);
                hero_panels(ui, palette);
            });
        });
        ui.add_space(SECTION_GAP);

        // ── Intelligence signals ──
        reveal_signals_head.show(ui, |ui| {
            eyebrow(ui, palette, content::SIGNALS_EYEBROW);
            section_title(ui, palette, content::SIGNALS_TITLE);
            lede(ui, palette, content::SIGNALS_LEDE);
        });
        ui.columns(content::SIGNALS.len(), |cols| {
            for (i, signal) in content::SIGNALS.iter().enumerate() {
                reveal_signals[i].show(&mut cols[i], |ui| signal_card(ui, palette, signal));
            }
        });
        ui.add_space(SECTION_GAP);

        // ── Trust pillars ──
        ui.columns(content::PILLARS.len(), |cols| {
            for (i, pillar) in content::PILLARS.iter().enumerate() {
                reveal_pillars[i].show(&mut cols[i], |ui| pillar_card(ui, palette, i, pillar));
            }
        });
        ui.add_space(SECTION_GAP);

        // ── Delivery timeline ──
        reveal_timeline_head.show(ui, |ui| {
            eyebrow(ui, palette, content::TIMELINE_EYEBROW);
            section_title(ui, palette, content::TIMELINE_TITLE);
        });
        ui.columns(content::TIMELINE.len(), |cols| {
            for (i, stage) in content::TIMELINE.iter().enumerate() {
                reveal_timeline[i].show(&mut cols[i], |ui| stage_card(ui, palette, stage));
            }
        });
        ui.add_space(SECTION_GAP);

        // ── Secure intake ──
        ui.columns(2, |cols| {
            reveal_intake_brief.show(&mut cols[0], |ui| intake_brief(ui, palette));
            reveal_intake_form.show(&mut cols[1], |ui| form.show(ui, palette));
        });
        ui.add_space(SECTION_GAP);

        footer(ui, palette);
        ui.add_space(32.0);
    });
}

fn nav(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(content::BRAND).size(18.0).color(palette.heading).strong());
            ui.label(RichText::new(content::BRAND_SUB).size(11.0).color(palette.muted));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let _ = ui.add(
                egui::Button::new(RichText::new("Enter Vault").color(palette.page_bg).strong())
                    .fill(palette.accent)
                    .rounding(egui::Rounding::same(6.0)),
            );
            ui.add_space(12.0);
            ui.label(RichText::new(content::CIPHERLINE).size(12.0).color(palette.muted));
        });
    });
}

fn hero_copy(ui: &mut egui::Ui, palette: &Palette) {
    eyebrow(ui, palette, content::HERO_EYEBROW);
    ui.label(
        RichText::new(content::HERO_TITLE)
            .size(38.0)
            .color(palette.heading)
            .strong(),
    );
    ui.add_space(12.0);
    ui.label(RichText::new(content::HERO_LEAD).size(16.0).color(palette.text));
    ui.add_space(18.0);
    ui.horizontal_wrapped(|ui| {
        for badge in content::ASSURANCE_BADGES {
            card_frame(palette).show(ui, |ui| {
                ui.label(RichText::new(*badge).size(11.0).color(palette.muted));
            });
        }
    });
}

fn hero_panels(ui: &mut egui::Ui, palette: &Palette) {
    ui.columns(2, |cols| {
        card_frame(palette).show(&mut cols[0], |ui| {
            ui.label(RichText::new("Confidence Index").size(11.0).color(palette.muted));
            ui.label(
                RichText::new(content::CONFIDENCE_INDEX)
                    .size(22.0)
                    .color(palette.accent)
                    .strong(),
            );
            ui.label(RichText::new("continuous recalibration").size(10.0).color(palette.muted));
        });
        card_frame(palette).show(&mut cols[1], |ui| {
            ui.label(RichText::new("Signal Integrity").size(11.0).color(palette.muted));
            ui.label(RichText::new("Tier Φ").size(22.0).color(palette.heading).strong());
        });
    });
}

fn signal_card(ui: &mut egui::Ui, palette: &Palette, signal: &content::Signal) {
    card_frame(palette).show(ui, |ui| {
        ui.label(RichText::new(signal.metric).size(13.0).color(palette.accent).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(signal.label).size(16.0).color(palette.heading).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(signal.description).size(13.0).color(palette.text));
    });
}

fn pillar_card(ui: &mut egui::Ui, palette: &Palette, index: usize, pillar: &content::Pillar) {
    card_frame(palette).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("◦ {}", index + 1)).size(12.0).color(palette.muted),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(pillar.stat).size(12.0).color(palette.accent));
            });
        });
        ui.add_space(8.0);
        ui.label(RichText::new(pillar.title).size(17.0).color(palette.heading).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(pillar.copy).size(13.0).color(palette.text));
        ui.add_space(10.0);
        let _ = ui.add(egui::Button::new(
            RichText::new("View Controls").size(12.0).color(palette.accent),
        ));
    });
}

fn stage_card(ui: &mut egui::Ui, palette: &Palette, stage: &content::Stage) {
    card_frame(palette).show(ui, |ui| {
        ui.label(RichText::new(stage.duration).size(13.0).color(palette.accent).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(stage.title).size(15.0).color(palette.heading).strong());
        ui.add_space(4.0);
        ui.label(RichText::new(stage.body).size(12.0).color(palette.text));
    });
}

fn intake_brief(ui: &mut egui::Ui, palette: &Palette) {
    eyebrow(ui, palette, content::INTAKE_EYEBROW);
    section_title(ui, palette, content::INTAKE_TITLE);
    lede(ui, palette, content::INTAKE_LEDE);
    for bullet in content::INTAKE_BULLETS {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("•").color(palette.accent));
            ui.label(RichText::new(*bullet).size(13.0).color(palette.text));
        });
        ui.add_space(4.0);
    }
}

fn footer(ui: &mut egui::Ui, palette: &Palette) {
    ui.separator();
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(content::BRAND).size(15.0).color(palette.heading).strong());
            ui.label(RichText::new(content::FOOTER_BRAND_SUB).size(11.0).color(palette.muted));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new("Sovereign intelligence, issued without exposure.")
                    .size(12.0)
                    .color(palette.muted),
            );
        });
    });
}
