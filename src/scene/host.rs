//! Scene Host: owns the emblem scene graph, the camera, and the clock.
//!
//! The graph is built once; each frame the host samples the clock exactly
//! once and hands the same elapsed value to every element and the camera.
//! `mount` starts the clock, `unmount` stops frame processing, and a
//! remount restarts from elapsed = 0 at the exact rest pose.

use std::time::Instant;

use log::info;

use crate::render::raymarch::{self, ViewParams};
use crate::render::EmblemScene;
use crate::scene::camera::OrbitCamera;
use crate::scene::elements::{
    AnimatedElement, EnergyCore, RingAssembly, SegmentRing, ShieldPlate,
};
use crate::render::{Material, Pose, Shape};

use glam::Vec3;

const BACKGROUND: [f32; 3] = [0.008, 0.012, 0.039];

/// Monotonic clock started at mount. The sole driver of all animation.
#[derive(Debug, Clone, Copy)]
struct Clock {
    started: Instant,
}

impl Clock {
    fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

pub struct SceneHost {
    scene: EmblemScene,
    elements: Vec<Box<dyn AnimatedElement>>,
    pub camera: OrbitCamera,
    clock: Option<Clock>,
}

impl SceneHost {
    /// Build the full emblem: back plate plus the four animated elements,
    /// all at their rest pose. The host starts unmounted.
    pub fn new() -> Self {
        let mut scene = EmblemScene::new(BACKGROUND);

        // Static back plate, just behind the assembly.
        scene.push(
            Shape::Disc {
                radius: 2.3,
                half_height: 0.02,
            },
            Material::metal([0.043, 0.071, 0.133], 0.8),
            Pose::at(Vec3::new(0.0, 0.0, -0.08)),
        );

        let elements: Vec<Box<dyn AnimatedElement>> = vec![
            Box::new(ShieldPlate::build(&mut scene)),
            Box::new(RingAssembly::build(&mut scene)),
            Box::new(SegmentRing::build(&mut scene)),
            Box::new(EnergyCore::build(&mut scene)),
        ];

        Self {
            scene,
            elements,
            camera: OrbitCamera::default(),
            clock: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.clock.is_some()
    }

    /// Start (or restart) the clock and snap every element to its rest
    /// pose. Mounting an already-mounted host is a no-op.
    pub fn mount(&mut self) {
        if self.clock.is_none() {
            self.clock = Some(Clock::start());
            self.advance(0.0);
            info!("emblem mounted");
        }
    }

    /// Stop frame processing. Safe to call at any time, including before
    /// the first frame.
    pub fn unmount(&mut self) {
        if self.clock.take().is_some() {
            info!("emblem unmounted");
        }
    }

    /// Per-frame step: sample the clock once, drive every element from that
    /// one value. Returns the sample, or `None` when unmounted (no updates
    /// happen in that case).
    pub fn tick(&mut self) -> Option<f32> {
        let elapsed = self.clock?.elapsed();
        self.advance(elapsed);
        Some(elapsed)
    }

    /// Apply all element poses for a given elapsed-time value. Pure in
    /// `elapsed`; exposed separately from `tick` so tests can drive a
    /// synthetic clock.
    pub fn advance(&mut self, elapsed: f32) {
        for element in &self.elements {
            element.update(&mut self.scene, elapsed);
        }
    }

    pub fn scene(&self) -> &EmblemScene {
        &self.scene
    }

    pub fn view(&self, elapsed: f32) -> ViewParams {
        self.camera.view(elapsed)
    }

    /// Render the current poses. `None` on a degenerate viewport — the
    /// caller shows a blank region instead.
    pub fn render(&self, width: usize, height: usize, elapsed: f32) -> Option<Vec<u8>> {
        raymarch::render(&self.scene, width, height, &self.view(elapsed))
    }
}

impl Default for SceneHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poses(host: &SceneHost) -> Vec<Pose> {
        host.scene().nodes().iter().map(|n| n.pose).collect()
    }

    #[test]
    fn tick_without_mount_is_a_no_op() {
        let mut host = SceneHost::new();
        let before = poses(&host);
        assert!(host.tick().is_none());
        assert_eq!(poses(&host), before);
    }

    #[test]
    fn unmount_before_first_frame_is_safe() {
        let mut host = SceneHost::new();
        host.unmount();
        assert!(!host.is_mounted());
        assert!(host.tick().is_none());
    }

    #[test]
    fn unmount_stops_updates() {
        let mut host = SceneHost::new();
        host.mount();
        host.advance(3.7);
        host.unmount();
        let frozen = poses(&host);
        assert!(host.tick().is_none());
        assert_eq!(poses(&host), frozen);
    }

    #[test]
    fn remount_restores_the_rest_pose() {
        let mut host = SceneHost::new();
        host.mount();
        host.advance(123.456);
        host.unmount();
        host.mount();

        let rest = poses(&SceneHost::new());
        assert_eq!(poses(&host), rest);
    }

    #[test]
    fn advance_is_idempotent_per_elapsed_value() {
        let mut host = SceneHost::new();
        host.advance(2.244);
        let first = poses(&host);
        host.advance(2.244);
        assert_eq!(poses(&host), first);
    }

    #[test]
    fn mounted_tick_reports_monotonic_elapsed() {
        let mut host = SceneHost::new();
        host.mount();
        let a = host.tick().unwrap();
        let b = host.tick().unwrap();
        assert!(b >= a);
    }

    #[test]
    fn scene_contains_backplate_and_all_elements() {
        // 1 back plate + 1 shield + 2 rings + 24 segments + 1 core.
        let host = SceneHost::new();
        assert_eq!(host.scene().len(), 29);
    }

    #[test]
    fn renders_at_rest_pose() {
        let host = SceneHost::new();
        let pixels = host.render(48, 36, 0.0).unwrap();
        assert_eq!(pixels.len(), 48 * 36 * 4);
    }
}
