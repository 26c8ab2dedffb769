//! CPU sphere tracer for the emblem scene.
//!
//! Renders an [`EmblemScene`] into an RGBA8 buffer: per-pixel rays from a
//! look-at camera, signed-distance marching against the posed solids, and a
//! two-light + ambient + environment shading pass. Rows render in parallel
//! via rayon.

use rayon::prelude::*;

use glam::Vec3;

use crate::render::{EmblemScene, Node, Shape};

const MAX_STEPS: u32 = 96;
const HIT_EPS: f32 = 1e-3;
const MAX_DIST: f32 = 24.0;

/// Viewing parameters handed in by the camera controller.
#[derive(Debug, Clone, Copy)]
pub struct ViewParams {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
}

// ── Signed distance evaluation ──

fn sd_shape(shape: &Shape, p: Vec3) -> f32 {
    match *shape {
        Shape::Sphere { radius } => p.length() - radius,
        Shape::Torus {
            major_radius,
            minor_radius,
        } => {
            let ring = p.truncate().length() - major_radius;
            (ring * ring + p.z * p.z).sqrt() - minor_radius
        }
        Shape::Box { half_extents } => {
            let q = p.abs() - half_extents;
            q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
        }
        Shape::Disc {
            radius,
            half_height,
        } => {
            let dr = p.truncate().length() - radius;
            let dz = p.z.abs() - half_height;
            dr.max(dz).min(0.0) + Vec3::new(dr.max(0.0), dz.max(0.0), 0.0).length()
        }
    }
}

fn sd_node(node: &Node, p: Vec3) -> f32 {
    let local = node.pose.to_local(p);
    sd_shape(&node.shape, local) * node.pose.scale
}

/// Distance to the nearest node, plus its index for material lookup.
fn sd_scene(nodes: &[Node], p: Vec3) -> (f32, usize) {
    let mut best = f32::MAX;
    let mut idx = 0;
    for (i, node) in nodes.iter().enumerate() {
        let d = sd_node(node, p);
        if d < best {
            best = d;
            idx = i;
        }
    }
    (best, idx)
}

fn normal_at(nodes: &[Node], p: Vec3) -> Vec3 {
    let e = 1e-3;
    let dx = sd_scene(nodes, p + Vec3::X * e).0 - sd_scene(nodes, p - Vec3::X * e).0;
    let dy = sd_scene(nodes, p + Vec3::Y * e).0 - sd_scene(nodes, p - Vec3::Y * e).0;
    let dz = sd_scene(nodes, p + Vec3::Z * e).0 - sd_scene(nodes, p - Vec3::Z * e).0;
    Vec3::new(dx, dy, dz).normalize_or_zero()
}

// ── Camera ──

struct Camera {
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    fov_factor: f32,
}

impl Camera {
    fn look_at(eye: Vec3, target: Vec3, fov_deg: f32) -> Self {
        let forward = (target - eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        Self {
            origin: eye,
            forward,
            right,
            up,
            fov_factor: (fov_deg.to_radians() * 0.5).tan(),
        }
    }

    fn ray(&self, u: f32, v: f32, aspect: f32) -> Vec3 {
        (self.forward
            + self.right * (u * self.fov_factor * aspect)
            + self.up * (v * self.fov_factor))
            .normalize()
    }
}

// ── Shading ──

fn background_color(v: f32, bg: [f32; 3]) -> Vec3 {
    // Subtle vertical lift toward the top of the frame.
    let t = (v * 0.5 + 0.5).clamp(0.0, 1.0);
    Vec3::from(bg) * (0.85 + t * 0.45)
}

fn shade(scene: &EmblemScene, hit: Vec3, ray_dir: Vec3, node_idx: usize) -> Vec3 {
    let nodes = scene.nodes();
    let mat = nodes[node_idx].material;
    let base = Vec3::from(mat.color);
    let n = normal_at(nodes, hit);
    let view = -ray_dir;

    let rig = scene.lights;
    let mut col = base * rig.ambient;

    for light in [rig.key, rig.fill] {
        let l = (light.position - hit).normalize_or_zero();
        let diffuse = n.dot(l).max(0.0) * light.intensity;
        let half = (l + view).normalize_or_zero();
        let spec = n.dot(half).max(0.0).powf(32.0)
            * light.intensity
            * (0.08 + 0.92 * mat.metallic);
        col += Vec3::from(light.color) * (base * diffuse + Vec3::splat(spec));
    }

    // Environment term: fresnel-weighted constant spec for metallic surfaces.
    let fresnel = (1.0 - n.dot(view).max(0.0)).powf(3.0);
    col += (base * 0.5 + Vec3::splat(0.5)) * fresnel * rig.env_intensity * mat.metallic * 0.4;

    col += Vec3::from(mat.emissive);
    col
}

// ── Public rendering API ──

/// Render the scene to an RGBA8 buffer. `None` when there is nothing to
/// render (empty scene or degenerate viewport) — callers degrade to a blank
/// region rather than fail.
pub fn render(
    scene: &EmblemScene,
    width: usize,
    height: usize,
    view: &ViewParams,
) -> Option<Vec<u8>> {
    if scene.is_empty() || width == 0 || height == 0 {
        return None;
    }

    let camera = Camera::look_at(view.eye, view.target, view.fov_deg);
    let nodes = scene.nodes();
    let aspect = width as f32 / height as f32;

    let mut pixels = vec![0u8; width * height * 4];
    let row_size = width * 4;

    pixels
        .par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(py, row)| {
            let v = -((py as f32 + 0.5) / height as f32 * 2.0 - 1.0);

            for px in 0..width {
                let u = (px as f32 + 0.5) / width as f32 * 2.0 - 1.0;
                let ray_dir = camera.ray(u, v, aspect);

                let mut t = 0.0f32;
                let mut hit_idx = None;
                for _ in 0..MAX_STEPS {
                    let p = camera.origin + ray_dir * t;
                    let (d, idx) = sd_scene(nodes, p);
                    if d < HIT_EPS {
                        hit_idx = Some(idx);
                        break;
                    }
                    t += d;
                    if t > MAX_DIST {
                        break;
                    }
                }

                let col = match hit_idx {
                    Some(idx) => shade(scene, camera.origin + ray_dir * t, ray_dir, idx),
                    None => background_color(v, scene.background),
                };

                let o = px * 4;
                row[o] = (col.x.clamp(0.0, 1.0) * 255.0) as u8;
                row[o + 1] = (col.y.clamp(0.0, 1.0) * 255.0) as u8;
                row[o + 2] = (col.z.clamp(0.0, 1.0) * 255.0) as u8;
                row[o + 3] = 255;
            }
        });

    Some(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Material, Pose};

    fn front_view() -> ViewParams {
        ViewParams {
            eye: Vec3::new(0.0, 0.0, 6.0),
            target: Vec3::ZERO,
            fov_deg: 38.0,
        }
    }

    #[test]
    fn renders_single_sphere() {
        let mut scene = EmblemScene::new([0.01, 0.01, 0.04]);
        scene.push(
            Shape::Sphere { radius: 1.0 },
            Material::matte([0.8, 0.2, 0.2]),
            Pose::IDENTITY,
        );
        let pixels = render(&scene, 64, 48, &front_view()).unwrap();
        assert_eq!(pixels.len(), 64 * 48 * 4);
        let has_red = pixels.chunks(4).any(|px| px[0] > 60);
        assert!(has_red, "sphere should be visible from the front");
    }

    #[test]
    fn empty_scene_returns_none() {
        let scene = EmblemScene::new([0.0; 3]);
        assert!(render(&scene, 64, 48, &front_view()).is_none());
    }

    #[test]
    fn degenerate_viewport_returns_none() {
        let mut scene = EmblemScene::new([0.0; 3]);
        scene.push(
            Shape::Sphere { radius: 1.0 },
            Material::matte([1.0; 3]),
            Pose::IDENTITY,
        );
        assert!(render(&scene, 0, 48, &front_view()).is_none());
        assert!(render(&scene, 64, 0, &front_view()).is_none());
    }

    #[test]
    fn torus_sdf_is_zero_on_the_ring() {
        let torus = Shape::Torus {
            major_radius: 2.2,
            minor_radius: 0.12,
        };
        // Point on the outer surface, in the XY plane.
        let p = Vec3::new(2.2 + 0.12, 0.0, 0.0);
        assert!(sd_shape(&torus, p).abs() < 1e-5);
    }

    #[test]
    fn posed_sphere_distance_respects_scale() {
        let node = Node {
            shape: Shape::Sphere { radius: 1.0 },
            material: Material::matte([1.0; 3]),
            pose: Pose {
                scale: 2.0,
                ..Pose::IDENTITY
            },
        };
        // Scaled sphere has world radius 2: surface point at x = 2.
        assert!(sd_node(&node, Vec3::new(2.0, 0.0, 0.0)).abs() < 1e-5);
        assert!((sd_node(&node, Vec3::new(4.0, 0.0, 0.0)) - 2.0).abs() < 1e-5);
    }
}
