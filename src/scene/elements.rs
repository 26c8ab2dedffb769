//! The four animated elements of the vault emblem.
//!
//! Each element owns the node handles it animates and nothing else. The
//! per-frame step is split in two: a pure `pose*` function mapping elapsed
//! seconds to a [`Pose`], and an [`AnimatedElement::update`] that applies
//! that pose through [`EmblemScene::set_pose`]. The pure half is what the
//! tests exercise.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::render::{EmblemScene, Material, NodeId, Pose, Shape};

pub const SEGMENT_COUNT: usize = 24;
pub const SEGMENT_RADIUS: f32 = 1.45;

// ─── Pure time → angle/scale drivers ─────────────────────────────────────────

/// Shield sway about Y: bounded, period ≈ 14 s, amplitude ≈ 12.6°.
pub fn shield_sway(elapsed: f32) -> f32 {
    (elapsed * 0.45).sin() * 0.22
}

/// Outer ring rotation about Z: unbounded, slow.
pub fn outer_ring_angle(elapsed: f32) -> f32 {
    elapsed * 0.1
}

/// Inner ring rotation about Z: opposite direction, 1.8× the outer rate.
pub fn inner_ring_angle(elapsed: f32) -> f32 {
    -elapsed * 0.18
}

/// Rigid rotation of the whole segment ring about Z.
pub fn segment_group_angle(elapsed: f32) -> f32 {
    elapsed * 0.35
}

/// Energy-core uniform scale: pulsation, period ≈ 4.5 s, amplitude ±6%.
pub fn core_pulse(elapsed: f32) -> f32 {
    1.0 + (elapsed * 1.4).sin() * 0.06
}

// ─── Element trait ───────────────────────────────────────────────────────────

/// One independently time-driven sub-assembly. `update` must be a pure
/// function of `elapsed` and the element's static parameters; it mutates
/// only the nodes the element owns.
pub trait AnimatedElement {
    fn update(&self, scene: &mut EmblemScene, elapsed: f32);
}

// ─── Shield Plate ────────────────────────────────────────────────────────────

const SHIELD_Z: f32 = 0.35;

/// Disc-like plate in front of the assembly, swaying about Y.
pub struct ShieldPlate {
    node: NodeId,
}

impl ShieldPlate {
    pub fn build(scene: &mut EmblemScene) -> Self {
        let node = scene.push(
            Shape::Disc {
                radius: 1.9,
                half_height: 0.075,
            },
            Material::metal([0.051, 0.082, 0.157], 0.7),
            Self::pose(0.0),
        );
        Self { node }
    }

    pub fn pose(elapsed: f32) -> Pose {
        Pose {
            translation: Vec3::new(0.0, 0.0, SHIELD_Z),
            rotation: Quat::from_rotation_y(shield_sway(elapsed)),
            scale: 1.0,
        }
    }
}

impl AnimatedElement for ShieldPlate {
    fn update(&self, scene: &mut EmblemScene, elapsed: f32) {
        scene.set_pose(self.node, Self::pose(elapsed));
    }
}

// ─── Dual Ring Assembly ──────────────────────────────────────────────────────

/// Two concentric tori counter-rotating about Z.
pub struct RingAssembly {
    outer: NodeId,
    inner: NodeId,
}

impl RingAssembly {
    pub fn build(scene: &mut EmblemScene) -> Self {
        let outer = scene.push(
            Shape::Torus {
                major_radius: 2.2,
                minor_radius: 0.12,
            },
            Material::metal([0.110, 0.145, 0.259], 1.0),
            Self::outer_pose(0.0),
        );
        let inner = scene.push(
            Shape::Torus {
                major_radius: 1.0,
                minor_radius: 0.075,
            },
            Material {
                color: [0.196, 0.251, 0.435],
                metallic: 0.8,
                emissive: [0.040, 0.058, 0.125],
            },
            Self::inner_pose(0.0),
        );
        Self { outer, inner }
    }

    pub fn outer_pose(elapsed: f32) -> Pose {
        Pose {
            rotation: Quat::from_rotation_z(outer_ring_angle(elapsed)),
            ..Pose::IDENTITY
        }
    }

    pub fn inner_pose(elapsed: f32) -> Pose {
        Pose {
            rotation: Quat::from_rotation_z(inner_ring_angle(elapsed)),
            ..Pose::IDENTITY
        }
    }
}

impl AnimatedElement for RingAssembly {
    fn update(&self, scene: &mut EmblemScene, elapsed: f32) {
        scene.set_pose(self.outer, Self::outer_pose(elapsed));
        scene.set_pose(self.inner, Self::inner_pose(elapsed));
    }
}

// ─── Segmented Core Ring ─────────────────────────────────────────────────────

/// 24 box prisms on a fixed circle, rotating rigidly as one group. Instance
/// positions and colors are fixed at construction; only the shared group
/// angle moves.
pub struct SegmentRing {
    segments: Vec<NodeId>,
}

impl SegmentRing {
    pub fn build(scene: &mut EmblemScene) -> Self {
        let segments = (0..SEGMENT_COUNT)
            .map(|i| {
                scene.push(
                    Shape::Box {
                        half_extents: Vec3::new(0.04, 0.25, 0.11),
                    },
                    Material {
                        color: Self::segment_color(i),
                        metallic: 0.9,
                        emissive: [0.047, 0.066, 0.193],
                    },
                    Self::segment_pose(i, 0.0),
                )
            })
            .collect();
        Self { segments }
    }

    /// Fixed local position of segment `i` on the ring circle.
    pub fn base_position(i: usize) -> Vec3 {
        let theta = i as f32 / SEGMENT_COUNT as f32 * TAU;
        Vec3::new(
            SEGMENT_RADIUS * theta.cos(),
            SEGMENT_RADIUS * theta.sin(),
            0.0,
        )
    }

    /// Colors alternate strictly by index parity.
    pub fn segment_color(i: usize) -> [f32; 3] {
        if i % 2 == 0 {
            [0.663, 0.749, 1.0]
        } else {
            [0.463, 0.565, 1.0]
        }
    }

    /// World pose of segment `i`: the rigid group rotation applied to its
    /// fixed base position.
    pub fn segment_pose(i: usize, elapsed: f32) -> Pose {
        let group = Quat::from_rotation_z(segment_group_angle(elapsed));
        Pose {
            translation: group * Self::base_position(i),
            rotation: group,
            scale: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl AnimatedElement for SegmentRing {
    fn update(&self, scene: &mut EmblemScene, elapsed: f32) {
        for (i, &node) in self.segments.iter().enumerate() {
            scene.set_pose(node, Self::segment_pose(i, elapsed));
        }
    }
}

// ─── Energy Core ─────────────────────────────────────────────────────────────

/// Central sphere pulsating in uniform scale.
pub struct EnergyCore {
    node: NodeId,
}

impl EnergyCore {
    pub fn build(scene: &mut EmblemScene) -> Self {
        let node = scene.push(
            Shape::Sphere { radius: 0.6 },
            Material {
                color: [0.624, 0.729, 1.0],
                metallic: 0.0,
                emissive: [0.785, 1.0, 1.0],
            },
            Self::pose(0.0),
        );
        Self { node }
    }

    pub fn pose(elapsed: f32) -> Pose {
        Pose {
            scale: core_pulse(elapsed),
            ..Pose::IDENTITY
        }
    }
}

impl AnimatedElement for EnergyCore {
    fn update(&self, scene: &mut EmblemScene, elapsed: f32) {
        scene.set_pose(self.node, Self::pose(elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sample_times() -> impl Iterator<Item = f32> {
        (0..2000).map(|i| i as f32 * 0.173)
    }

    #[test]
    fn shield_sway_stays_in_band() {
        for t in sample_times() {
            let a = shield_sway(t);
            assert!((-0.22..=0.22).contains(&a), "sway {a} out of band at t={t}");
        }
    }

    #[test]
    fn core_pulse_stays_in_band() {
        for t in sample_times() {
            let s = core_pulse(t);
            assert!((0.94..=1.06).contains(&s), "scale {s} out of band at t={t}");
        }
    }

    #[test]
    fn ring_rates_are_opposite_with_ratio_1_8() {
        for t in sample_times().skip(1) {
            let outer = outer_ring_angle(t);
            let inner = inner_ring_angle(t);
            assert!(outer * inner <= 0.0, "angular velocities must oppose");
            assert!((inner.abs() / outer.abs() - 1.8).abs() < 1e-4);
        }
    }

    #[test]
    fn rest_pose_at_zero_elapsed() {
        assert_eq!(shield_sway(0.0), 0.0);
        assert_eq!(outer_ring_angle(0.0), 0.0);
        assert_eq!(inner_ring_angle(0.0), 0.0);
        assert_eq!(segment_group_angle(0.0), 0.0);
        assert_eq!(core_pulse(0.0), 1.0);
    }

    #[test]
    fn core_returns_to_rest_at_half_period() {
        // elapsed = π / 1.4 puts the pulse phase at sin(π) = 0.
        let s = core_pulse(PI / 1.4);
        assert!((s - 1.0).abs() < 1e-5);
    }

    #[test]
    fn segment_ring_has_24_instances() {
        let mut scene = EmblemScene::new([0.0; 3]);
        let ring = SegmentRing::build(&mut scene);
        assert_eq!(ring.len(), SEGMENT_COUNT);
        assert_eq!(scene.len(), SEGMENT_COUNT);
    }

    #[test]
    fn opposite_segments_are_diametric() {
        for i in 0..SEGMENT_COUNT / 2 {
            let a = SegmentRing::base_position(i);
            let b = SegmentRing::base_position(i + SEGMENT_COUNT / 2);
            assert!((a + b).length() < 1e-4, "segments {i} and {} must oppose", i + 12);
        }
    }

    #[test]
    fn segment_colors_alternate_by_parity() {
        for i in 0..SEGMENT_COUNT {
            assert_eq!(SegmentRing::segment_color(i), SegmentRing::segment_color(i % 2));
            assert_ne!(
                SegmentRing::segment_color(i),
                SegmentRing::segment_color(i + 1)
            );
        }
    }

    #[test]
    fn group_rotation_is_rigid() {
        // Angular separation between adjacent segments is preserved under
        // the group rotation.
        let t = 7.31;
        for i in 0..SEGMENT_COUNT {
            let a = SegmentRing::segment_pose(i, t).translation;
            let b = SegmentRing::segment_pose((i + 1) % SEGMENT_COUNT, t).translation;
            let expected = 2.0 * SEGMENT_RADIUS * (PI / SEGMENT_COUNT as f32).sin();
            assert!(((a - b).length() - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn poses_are_pure_in_elapsed() {
        for t in [0.0, 0.5, 2.244, 100.0, 9999.5] {
            assert_eq!(ShieldPlate::pose(t), ShieldPlate::pose(t));
            assert_eq!(RingAssembly::outer_pose(t), RingAssembly::outer_pose(t));
            assert_eq!(RingAssembly::inner_pose(t), RingAssembly::inner_pose(t));
            assert_eq!(EnergyCore::pose(t), EnergyCore::pose(t));
            assert_eq!(SegmentRing::segment_pose(7, t), SegmentRing::segment_pose(7, t));
        }
    }

    #[test]
    fn update_applies_the_pure_pose() {
        let mut scene = EmblemScene::new([0.0; 3]);
        let core = EnergyCore::build(&mut scene);
        core.update(&mut scene, 1.1);
        let applied = scene.pose(core.node);
        assert_eq!(applied, EnergyCore::pose(1.1));
    }
}
