//! One-shot reveal transitions.
//!
//! Wraps arbitrary content and plays a single fade + slide-up (opacity
//! 0→1, vertical offset 60→0 px, ease-out, 0.9 s, optional start delay) the
//! first time the wrapped region scrolls far enough into the viewport.
//! After the first trigger the transition never replays; content that never
//! becomes visible never transitions.

use eframe::egui;

pub const DURATION: f32 = 0.9;
pub const OFFSET_PX: f32 = 60.0;
/// The region must be this far inside the viewport edge to count as
/// visible.
pub const MARGIN_PX: f32 = 120.0;

fn ease_out(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// The trigger machine, kept free of egui so it can be driven by a
/// synthetic clock in tests.
#[derive(Debug, Clone, Copy)]
pub struct RevealState {
    delay: f32,
    triggered_at: Option<f64>,
}

impl RevealState {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            triggered_at: None,
        }
    }

    /// Record that the region is visible at time `now`. Only the first call
    /// has any effect; later visibility changes are ignored.
    pub fn note_visible(&mut self, now: f64) {
        if self.triggered_at.is_none() {
            self.triggered_at = Some(now + self.delay as f64);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Eased transition progress in [0, 1] at time `now`. 0 until the
    /// (delayed) trigger instant, 1 once the transition has finished.
    pub fn progress(&self, now: f64) -> f32 {
        match self.triggered_at {
            None => 0.0,
            Some(t0) => ease_out(((now - t0) as f32 / DURATION).clamp(0.0, 1.0)),
        }
    }

    /// Whether a repaint is still needed to finish the transition.
    pub fn animating(&self, now: f64) -> bool {
        self.is_triggered() && self.progress(now) < 1.0
    }
}

/// egui wrapper around [`RevealState`].
pub struct Reveal {
    state: RevealState,
}

impl Reveal {
    pub fn new(delay: f32) -> Self {
        Self {
            state: RevealState::new(delay),
        }
    }

    pub fn show<R>(
        &mut self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        let now = ui.ctx().input(|i| i.time);
        let progress = self.state.progress(now);

        let inner = ui.scope(|ui| {
            ui.add_space((1.0 - progress) * OFFSET_PX);
            ui.set_opacity(progress);
            add_contents(ui)
        });

        // Visibility check against the scroll viewport, shrunk by the
        // trigger margin.
        let clip = ui.clip_rect().shrink(MARGIN_PX);
        if clip.intersects(inner.response.rect) {
            self.state.note_visible(now);
        }
        if self.state.animating(now) {
            ui.ctx().request_repaint();
        }

        inner.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_visible_never_triggers() {
        let state = RevealState::new(0.0);
        for now in [0.0, 10.0, 1e6] {
            assert_eq!(state.progress(now), 0.0);
        }
        assert!(!state.is_triggered());
    }

    #[test]
    fn triggers_at_most_once() {
        let mut state = RevealState::new(0.0);
        state.note_visible(5.0);
        // A later visibility toggle must not restart the transition.
        state.note_visible(50.0);
        assert_eq!(state.progress(5.0 + DURATION as f64), 1.0);
        assert_eq!(state.progress(51.0), 1.0);
    }

    #[test]
    fn delay_postpones_the_start() {
        let mut state = RevealState::new(0.5);
        state.note_visible(1.0);
        assert_eq!(state.progress(1.2), 0.0);
        assert!(state.progress(1.6) > 0.0);
    }

    #[test]
    fn progress_is_monotonic_and_completes() {
        let mut state = RevealState::new(0.0);
        state.note_visible(0.0);
        let mut last = -1.0;
        for i in 0..=20 {
            let p = state.progress(i as f64 * DURATION as f64 / 10.0);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
        assert!(!state.animating(2.0 * DURATION as f64));
    }

    #[test]
    fn ease_out_hits_both_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        // Ease-out: front-loaded velocity.
        assert!(ease_out(0.5) > 0.5);
    }
}
