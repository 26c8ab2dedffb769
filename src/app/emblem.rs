//! The animated vault-emblem viewport.
//!
//! Bridges the `SceneHost` render loop into egui: every frame it ticks the
//! host's clock, sphere-traces the scene into an RGBA buffer, uploads it as
//! a texture, and requests the next repaint. Drag input orbits the camera;
//! scroll/zoom is deliberately not wired. If rendering ever yields nothing
//! the region stays blank and the rest of the page is unaffected.

use eframe::egui;
use log::warn;

use accrueflow_landing::scene::SceneHost;

/// Render resolution: reduced while the pointer is dragging, like any
/// interactive preview.
const FULL_RES: (usize, usize) = (320, 240);
const DRAG_RES: (usize, usize) = (200, 150);

pub struct EmblemView {
    host: SceneHost,
    texture: Option<egui::TextureHandle>,
    dragging: bool,
    degrade_logged: bool,
}

impl EmblemView {
    pub fn new() -> Self {
        let mut host = SceneHost::new();
        host.mount();
        Self {
            host,
            texture: None,
            dragging: false,
            degrade_logged: false,
        }
    }

    /// Draw the emblem into a region of the given height, full available
    /// width.
    pub fn ui(&mut self, ui: &mut egui::Ui, height: f32) {
        let size = egui::vec2(ui.available_width(), height);
        let response = ui.allocate_response(size, egui::Sense::click_and_drag());

        if response.dragged() {
            let delta = response.drag_delta();
            self.host.camera.drag(delta.x, delta.y);
            self.dragging = true;
        } else {
            self.dragging = false;
        }

        match self.host.tick() {
            Some(elapsed) => {
                let (w, h) = if self.dragging { DRAG_RES } else { FULL_RES };
                match self.host.render(w, h, elapsed) {
                    Some(pixels) => {
                        let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &pixels);
                        self.texture = Some(ui.ctx().load_texture(
                            "vault_emblem",
                            image,
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                    None => {
                        if !self.degrade_logged {
                            warn!("emblem render unavailable; showing blank region");
                            self.degrade_logged = true;
                        }
                        self.texture = None;
                    }
                }
                // Continuous animation: keep the frame loop running.
                ui.ctx().request_repaint();
            }
            None => self.texture = None,
        }

        if let Some(ref tex) = self.texture {
            ui.painter().image(
                tex.id(),
                response.rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            // Degraded: blank emblem region, page fully functional.
            ui.painter()
                .rect_filled(response.rect, 12.0, egui::Color32::from_rgb(2, 3, 10));
        }
    }
}

impl Drop for EmblemView {
    fn drop(&mut self) {
        self.host.unmount();
    }
}
