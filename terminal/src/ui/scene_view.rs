//! # Scene Projection
//!
//! Paints the animated backdrop onto an egui painter: a wireframe icosahedron
//! core, two rings, the particle debris and a slow star field. All geometry is
//! transformed by the poses from [`crate::scene::SceneState`] and projected
//! through a pinhole camera on the +Z axis looking at the origin.

use egui::{Color32, Painter, Pos2, Rect, Stroke};
use once_cell::sync::Lazy;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::scene::animator::CAMERA_FOV_DEG;
use crate::scene::{ParticleInstance, Pose, SceneState, Vec3};
use crate::ui::theme::AetherisColors;

const RING_PRIMARY_RADIUS: f32 = 1.8;
const RING_SECONDARY_RADIUS: f32 = 2.2;
const RING_SEGMENTS: usize = 96;
const DEBRIS_SIZE: f32 = 0.1;
const NEAR_PLANE: f32 = 0.1;
const STAR_COUNT: usize = 600;

/// Unit icosahedron: 12 vertices, 30 edges
pub static ICOSAHEDRON: Lazy<(Vec<Vec3>, Vec<(usize, usize)>)> = Lazy::new(|| {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        (-1.0, phi, 0.0),
        (1.0, phi, 0.0),
        (-1.0, -phi, 0.0),
        (1.0, -phi, 0.0),
        (0.0, -1.0, phi),
        (0.0, 1.0, phi),
        (0.0, -1.0, -phi),
        (0.0, 1.0, -phi),
        (phi, 0.0, -1.0),
        (phi, 0.0, 1.0),
        (-phi, 0.0, -1.0),
        (-phi, 0.0, 1.0),
    ];
    let norm = (1.0 + phi * phi).sqrt();
    let vertices: Vec<Vec3> = raw
        .iter()
        .map(|&(x, y, z)| Vec3::new(x / norm, y / norm, z / norm))
        .collect();

    // Neighbours sit exactly one edge length (2 before normalizing) apart
    let edge = 2.0 / norm;
    let mut edges = Vec::with_capacity(30);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if ((vertices[i] - vertices[j]).length() - edge).abs() < 1e-3 {
                edges.push((i, j));
            }
        }
    }
    (vertices, edges)
});

/// Pinhole camera at `(0, 0, z)` looking down -Z
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub z: f32,
    focal: f32,
    center: Pos2,
}

impl Camera {
    pub fn new(rect: Rect, z: f32) -> Self {
        let focal = (rect.height() / 2.0) / (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
        Self {
            z,
            focal,
            center: rect.center(),
        }
    }

    /// Screen position and pixels-per-world-unit at that depth. `None` behind the near plane.
    pub fn project(&self, p: Vec3) -> Option<(Pos2, f32)> {
        let depth = self.z - p.z;
        if depth < NEAR_PLANE {
            return None;
        }
        let scale = self.focal / depth;
        Some((
            Pos2::new(self.center.x + p.x * scale, self.center.y - p.y * scale),
            scale,
        ))
    }
}

/// Circle of `radius` in the local XY plane, rotated by `euler`.
pub fn ring_points(radius: f32, segments: usize, euler: Vec3) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * TAU;
            Vec3::new(radius * a.cos(), radius * a.sin(), 0.0).rotate(euler)
        })
        .collect()
}

/// Pointer in normalized device coordinates (`[-1, 1]`, y up) relative to `rect`.
pub fn pointer_ndc(rect: Rect, pointer: Option<Pos2>) -> [f32; 2] {
    match pointer {
        Some(p) if rect.width() > 0.0 && rect.height() > 0.0 => {
            let c = rect.center();
            [
                ((p.x - c.x) / (rect.width() / 2.0)).clamp(-1.0, 1.0),
                (-(p.y - c.y) / (rect.height() / 2.0)).clamp(-1.0, 1.0),
            ]
        }
        _ => [0.0, 0.0],
    }
}

/// Backdrop renderer. Holds only the static star positions.
pub struct SceneView {
    stars: Vec<Vec3>,
}

impl SceneView {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| {
                // Shell between radius 50 and 100
                let dir = Vec3::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                );
                let len = dir.length().max(1e-3);
                dir * (rng.random_range(50.0..100.0) / len)
            })
            .collect();
        Self { stars }
    }

    pub fn paint(
        &self,
        painter: &Painter,
        rect: Rect,
        scene: &SceneState,
        particles: &[ParticleInstance],
        elapsed: f32,
        colors: &AetherisColors,
    ) {
        painter.rect_filled(rect, 0.0, colors.background);
        let camera = Camera::new(rect, scene.camera_z);

        self.paint_stars(painter, &camera, elapsed);
        paint_rings(painter, &camera, scene, colors);
        paint_core(painter, &camera, scene, colors);
        paint_debris(painter, &camera, &scene.main, particles);
    }

    fn paint_stars(&self, painter: &Painter, camera: &Camera, elapsed: f32) {
        let spin = Vec3::new(0.0, elapsed * 0.01, 0.0);
        for star in &self.stars {
            if let Some((pos, _)) = camera.project(star.rotate(spin)) {
                painter.circle_filled(pos, 0.8, Color32::from_white_alpha(140));
            }
        }
    }
}

fn paint_core(painter: &Painter, camera: &Camera, scene: &SceneState, colors: &AetherisColors) {
    let (vertices, edges) = &*ICOSAHEDRON;
    let projected: Vec<Option<Pos2>> = vertices
        .iter()
        .map(|&v| camera.project(scene.main.apply(v * scene.core_scale)).map(|(p, _)| p))
        .collect();

    if let Some((center, scale)) = camera.project(scene.main.position) {
        let r = scene.main.scale * scene.core_scale * scale;
        painter.circle_filled(center, r * 1.1, colors.accent.gamma_multiply(0.08));
    }

    let stroke = Stroke::new(1.5, colors.accent);
    for &(i, j) in edges {
        if let (Some(a), Some(b)) = (projected[i], projected[j]) {
            painter.line_segment([a, b], stroke);
        }
    }
}

fn paint_rings(painter: &Painter, camera: &Camera, scene: &SceneState, colors: &AetherisColors) {
    let rings = [
        (
            RING_PRIMARY_RADIUS,
            Vec3::new(FRAC_PI_2, 0.0, scene.ring_primary),
            colors.accent,
            1.5,
        ),
        (
            RING_SECONDARY_RADIUS,
            Vec3::new(scene.ring_secondary, FRAC_PI_4, 0.0),
            colors.accent_alt,
            1.0,
        ),
    ];

    for (radius, euler, color, width) in rings {
        let points: Vec<Option<Pos2>> = ring_points(radius, RING_SEGMENTS, euler)
            .into_iter()
            .map(|p| camera.project(scene.main.apply(p)).map(|(pos, _)| pos))
            .collect();

        for i in 0..points.len() {
            // Alternate bands so the spin is visible on a round ring
            let alpha = if (i / 6) % 2 == 0 { 1.0 } else { 0.45 };
            if let (Some(a), Some(b)) = (points[i], points[(i + 1) % points.len()]) {
                painter.line_segment([a, b], Stroke::new(width, color.gamma_multiply(alpha)));
            }
        }
    }
}

fn paint_debris(painter: &Painter, camera: &Camera, main: &Pose, particles: &[ParticleInstance]) {
    for particle in particles {
        let Some((pos, scale)) = camera.project(main.apply(particle.position)) else {
            continue;
        };
        let side = (DEBRIS_SIZE * particle.scale.x.abs() * main.scale * scale).max(0.5);
        let shade = 150 + (105.0 * particle.rotation.x.sin().abs()) as u8;
        painter.rect_filled(
            Rect::from_center_size(pos, egui::vec2(side, side)),
            0.0,
            Color32::from_gray(shade),
        );
    }
}
