//! Emblem scene description.
//!
//! The vault emblem is a fixed set of posed SDF solids plus a light rig.
//! Topology is built once at construction and never changes; animation only
//! rewrites poses through [`EmblemScene::set_pose`]. The sphere tracer in
//! [`raymarch`] consumes the scene read-only.

pub mod raymarch;

use glam::{Quat, Vec3};

/// Local-space solid, centered at the origin.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere {
        radius: f32,
    },
    /// Torus lying in the local XY plane (revolution axis = Z).
    Torus {
        major_radius: f32,
        minor_radius: f32,
    },
    Box {
        half_extents: Vec3,
    },
    /// Capped cylinder along the local Z axis; reads as a disc/plate when
    /// `half_height` is small relative to `radius`.
    Disc {
        radius: f32,
        half_height: f32,
    },
}

/// Surface parameters for the toon-metal shading model.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: [f32; 3],
    /// 0 = matte, 1 = full mirror-weighted specular + environment term.
    pub metallic: f32,
    pub emissive: [f32; 3],
}

impl Material {
    pub const fn matte(color: [f32; 3]) -> Self {
        Self {
            color,
            metallic: 0.0,
            emissive: [0.0; 3],
        }
    }

    pub const fn metal(color: [f32; 3], metallic: f32) -> Self {
        Self {
            color,
            metallic,
            emissive: [0.0; 3],
        }
    }
}

/// World pose of a node: translate ∘ rotate ∘ uniform-scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
    };

    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Map a world-space point into this pose's local space.
    pub fn to_local(&self, p: Vec3) -> Vec3 {
        self.rotation.inverse() * (p - self.translation) / self.scale
    }
}

/// One renderable node: a shape, its material, and its current pose.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub shape: Shape,
    pub material: Material,
    pub pose: Pose,
}

/// Opaque handle to a node inside an [`EmblemScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Point-style light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Static lighting rig: two point-style lights, an ambient floor, and a
/// constant environment-specular weight for metallic surfaces.
#[derive(Debug, Clone, Copy)]
pub struct LightRig {
    pub key: Light,
    pub fill: Light,
    pub ambient: f32,
    pub env_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            key: Light {
                position: Vec3::new(5.0, 6.0, 6.0),
                color: [1.0, 0.98, 0.95],
                intensity: 1.2,
            },
            fill: Light {
                position: Vec3::new(-5.0, -6.0, 6.0),
                color: [0.42, 0.51, 1.0],
                intensity: 0.8,
            },
            ambient: 0.3,
            env_intensity: 1.2,
        }
    }
}

/// The complete emblem scene: fixed nodes, light rig, background.
#[derive(Debug, Clone)]
pub struct EmblemScene {
    nodes: Vec<Node>,
    pub lights: LightRig,
    pub background: [f32; 3],
}

impl EmblemScene {
    pub fn new(background: [f32; 3]) -> Self {
        Self {
            nodes: Vec::new(),
            lights: LightRig::default(),
            background,
        }
    }

    /// Add a node at its rest pose; the returned handle is the only way to
    /// move it afterwards.
    pub fn push(&mut self, shape: Shape, material: Material, pose: Pose) -> NodeId {
        self.nodes.push(Node {
            shape,
            material,
            pose,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Replace a node's pose. The single mutation point of the scene graph.
    pub fn set_pose(&mut self, id: NodeId, pose: Pose) {
        self.nodes[id.0].pose = pose;
    }

    pub fn pose(&self, id: NodeId) -> Pose {
        self.nodes[id.0].pose
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pose_moves_only_the_target_node() {
        let mut scene = EmblemScene::new([0.0; 3]);
        let a = scene.push(
            Shape::Sphere { radius: 1.0 },
            Material::matte([1.0, 0.0, 0.0]),
            Pose::IDENTITY,
        );
        let b = scene.push(
            Shape::Sphere { radius: 0.5 },
            Material::matte([0.0, 1.0, 0.0]),
            Pose::IDENTITY,
        );

        scene.set_pose(a, Pose::at(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scene.pose(a).translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.pose(b), Pose::IDENTITY);
    }

    #[test]
    fn to_local_undoes_translation_rotation_and_scale() {
        let pose = Pose {
            translation: Vec3::new(0.0, 0.0, 2.0),
            rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            scale: 2.0,
        };
        // World point = pose applied to local (1, 0, 0).
        let world = pose.translation + pose.rotation * (Vec3::X * pose.scale);
        let local = pose.to_local(world);
        assert!((local - Vec3::X).length() < 1e-5);
    }
}
