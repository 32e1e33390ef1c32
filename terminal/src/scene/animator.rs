//! # Scene Animator
//!
//! Per-frame pose update for the background scene. Given the previous state, the
//! current inputs (view, time, scroll, pointer) and the frame delta, [`step`]
//! returns the next state. It is pure: the renderer owns the result and feeds it
//! back on the next frame.
//!
//! ## Targets per view
//!
//! | view            | rotation.y        | scale                 | position            |
//! |-----------------|-------------------|-----------------------|---------------------|
//! | landing         | `offset * 4π`     | `1 + sin(offset·π)/2` | pointer-follow      |
//! | markets         | `elapsed * 0.1`   | `0.6`                 | `(-w/3, 0, -2)`     |
//! | overview/mypage | `elapsed * 0.1`   | `0.8`                 | `(w/4, 0, -2)`      |
//!
//! Everything except the core pulse and the ring spin is eased toward its
//! target by the damping factor once per call.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::app::state::View;
use crate::scene::pose::{lerp, Pose, Vec3};

/// Fraction of the remaining distance covered per frame.
pub const DAMPING: f32 = 0.05;

/// Camera vertical field of view in degrees
pub const CAMERA_FOV_DEG: f32 = 35.0;

/// Seconds per reference frame. Per-frame spin rates are expressed in these.
pub const REFERENCE_FRAME: f32 = 1.0 / 60.0;

const RING_PRIMARY_SPIN: f32 = 0.01;
const RING_SECONDARY_SPIN: f32 = 0.005;

/// Scene tuning, persisted as part of the app config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub damping: f32,
    pub landing_particles: usize,
    pub dashboard_particles: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            landing_particles: 40,
            dashboard_particles: 20,
        }
    }
}

impl SceneConfig {
    /// Particle count for the given view.
    pub fn particle_count(&self, view: View) -> usize {
        if view == View::Landing {
            self.landing_particles
        } else {
            self.dashboard_particles
        }
    }
}

/// Everything the animator reads from the outside world for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneInputs {
    pub view: View,
    /// Seconds since the scene started
    pub elapsed: f32,
    /// Landing scroll progress in `[0, 1]`
    pub scroll_offset: f32,
    /// Pointer in normalized device coordinates, `[-1, 1]`, y up
    pub pointer: [f32; 2],
    /// Visible width/height in world units at the origin plane
    pub viewport: [f32; 2],
}

impl Default for SceneInputs {
    fn default() -> Self {
        Self {
            view: View::Landing,
            elapsed: 0.0,
            scroll_offset: 0.0,
            pointer: [0.0, 0.0],
            viewport: viewport_at(16.0 / 9.0, 5.0),
        }
    }
}

/// Poses and spins of all animated objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    /// Group holding the core and both rings
    pub main: Pose,
    /// Inner icosahedron pulse
    pub core_scale: f32,
    /// Ring 1 spin about its own z axis
    pub ring_primary: f32,
    /// Ring 2 spin about its own x axis
    pub ring_secondary: f32,
    pub camera_z: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            main: Pose::default(),
            core_scale: 1.0,
            ring_primary: 0.0,
            ring_secondary: 0.0,
            camera_z: 5.0,
        }
    }
}

/// Where the main group and camera want to be for the given inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTarget {
    pub rotation: Vec3,
    pub scale: f32,
    pub position: Vec3,
    pub camera_z: f32,
}

/// Visible world-space size of the plane at distance `camera_z`.
pub fn viewport_at(aspect: f32, camera_z: f32) -> [f32; 2] {
    let height = 2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * camera_z;
    [height * aspect, height]
}

/// Scroll offset the animator actually uses. Only the landing page scrolls.
pub fn effective_offset(inputs: &SceneInputs) -> f32 {
    if inputs.view == View::Landing {
        inputs.scroll_offset.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

pub fn target(inputs: &SceneInputs) -> SceneTarget {
    let offset = effective_offset(inputs);
    let [w, h] = inputs.viewport;
    let tilt = (inputs.elapsed * 0.5).sin() * 0.2;

    match inputs.view {
        View::Landing => SceneTarget {
            rotation: Vec3::new(tilt, offset * PI * 4.0, 0.0),
            scale: 1.0 + (offset * PI).sin() * 0.5,
            position: Vec3::new(
                inputs.pointer[0] * w / 10.0,
                inputs.pointer[1] * h / 10.0,
                0.0,
            ),
            camera_z: 5.0 + offset * 5.0,
        },
        View::Markets => SceneTarget {
            rotation: Vec3::new(tilt, inputs.elapsed * 0.1, 0.0),
            scale: 0.6,
            position: Vec3::new(-w / 3.0, 0.0, -2.0),
            camera_z: 6.0,
        },
        View::Overview | View::MyPage => SceneTarget {
            rotation: Vec3::new(tilt, inputs.elapsed * 0.1, 0.0),
            scale: 0.8,
            position: Vec3::new(w / 4.0, 0.0, -2.0),
            camera_z: 6.0,
        },
    }
}

/// Advance one frame with the default damping.
pub fn step(prev: &SceneState, inputs: &SceneInputs, dt: f32) -> SceneState {
    step_with(prev, inputs, dt, DAMPING)
}

/// Advance one frame with an explicit damping factor.
pub fn step_with(prev: &SceneState, inputs: &SceneInputs, dt: f32, damping: f32) -> SceneState {
    let goal = target(inputs);
    let frames = dt.max(0.0) / REFERENCE_FRAME;
    let k = damping.clamp(0.0, 1.0);

    SceneState {
        main: Pose {
            position: prev.main.position.lerp(goal.position, k),
            rotation: prev.main.rotation.lerp(goal.rotation, k),
            scale: lerp(prev.main.scale, goal.scale, k),
        },
        core_scale: 1.0 + (inputs.elapsed * 2.0).sin() * 0.05,
        ring_primary: (prev.ring_primary + RING_PRIMARY_SPIN * frames).rem_euclid(TAU),
        ring_secondary: (prev.ring_secondary + RING_SECONDARY_SPIN * frames).rem_euclid(TAU),
        camera_z: lerp(prev.camera_z, goal.camera_z, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(view: View) -> SceneInputs {
        SceneInputs {
            view,
            viewport: [8.0, 4.5],
            ..SceneInputs::default()
        }
    }

    fn distance(state: &SceneState, goal: &SceneTarget) -> f32 {
        (state.main.position - goal.position).length()
            + (state.main.rotation - goal.rotation).length()
            + (state.main.scale - goal.scale).abs()
            + (state.camera_z - goal.camera_z).abs()
    }

    #[test]
    fn test_markets_targets() {
        let goal = target(&inputs(View::Markets));
        assert_eq!(goal.scale, 0.6);
        assert_eq!(goal.position, Vec3::new(-8.0 / 3.0, 0.0, -2.0));
        assert_eq!(goal.camera_z, 6.0);
    }

    #[test]
    fn test_dashboard_targets() {
        for view in [View::Overview, View::MyPage] {
            let goal = target(&inputs(view));
            assert_eq!(goal.scale, 0.8);
            assert_eq!(goal.position, Vec3::new(2.0, 0.0, -2.0));
        }
    }

    #[test]
    fn test_landing_scroll_drives_spin_and_scale() {
        let mut i = inputs(View::Landing);
        i.scroll_offset = 0.5;
        let goal = target(&i);
        assert!((goal.rotation.y - 2.0 * PI).abs() < 1e-5);
        assert!((goal.scale - 1.5).abs() < 1e-5);
        assert!((goal.camera_z - 7.5).abs() < 1e-5);
    }

    #[test]
    fn test_landing_follows_pointer() {
        let mut i = inputs(View::Landing);
        i.pointer = [1.0, -1.0];
        let goal = target(&i);
        assert!((goal.position.x - 0.8).abs() < 1e-5);
        assert!((goal.position.y + 0.45).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_ignored_outside_landing() {
        let mut i = inputs(View::Markets);
        i.scroll_offset = 0.9;
        assert_eq!(effective_offset(&i), 0.5);
    }

    #[test]
    fn test_step_converges_toward_target() {
        let i = inputs(View::Markets);
        let goal = target(&i);
        let mut state = SceneState::default();
        let mut last = distance(&state, &goal);
        for _ in 0..200 {
            state = step(&state, &i, REFERENCE_FRAME);
            let d = distance(&state, &goal);
            assert!(d <= last + 1e-6);
            last = d;
        }
        assert!(last < 0.01, "still {} away after 200 frames", last);
    }

    #[test]
    fn test_damping_bounds_per_frame_move() {
        let i = inputs(View::Overview);
        let goal = target(&i);
        let prev = SceneState::default();
        let next = step(&prev, &i, REFERENCE_FRAME);

        let gap = (goal.position - prev.main.position).length();
        let moved = (next.main.position - prev.main.position).length();
        assert!((moved - gap * DAMPING).abs() < 1e-5);
        assert!((next.main.scale - lerp(1.0, 0.8, DAMPING)).abs() < 1e-6);
    }

    #[test]
    fn test_rings_spin_by_reference_frames() {
        let i = inputs(View::Landing);
        let next = step(&SceneState::default(), &i, REFERENCE_FRAME * 2.0);
        assert!((next.ring_primary - 0.02).abs() < 1e-5);
        assert!((next.ring_secondary - 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_core_pulse_is_not_eased() {
        let mut i = inputs(View::Overview);
        i.elapsed = PI / 4.0;
        let next = step(&SceneState::default(), &i, REFERENCE_FRAME);
        assert!((next.core_scale - 1.05).abs() < 1e-5);
    }

    #[test]
    fn test_particle_count_per_view() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.particle_count(View::Landing), 40);
        assert_eq!(cfg.particle_count(View::Markets), 20);
        assert_eq!(cfg.particle_count(View::MyPage), 20);
    }

    #[test]
    fn test_viewport_scales_with_distance() {
        let near = viewport_at(2.0, 5.0);
        let far = viewport_at(2.0, 10.0);
        assert!((far[1] - near[1] * 2.0).abs() < 1e-4);
        assert!((near[0] - near[1] * 2.0).abs() < 1e-4);
    }
}
