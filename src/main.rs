use eframe::egui;

mod app;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AccrueFlow — Timeless Intelligence Platform",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::LandingApp::default()))
        }),
    )
    .expect("Failed to start AccrueFlow landing");
}
