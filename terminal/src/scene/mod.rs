//! # Background Scene
//!
//! Renderer-independent state for the 3D backdrop: an icosahedron core inside
//! two rings, plus a drifting particle field. [`animator::step`] computes the
//! next frame's poses; [`crate::ui::scene_view`] projects them onto the painter.

pub mod animator;
pub mod particles;
pub mod pose;

pub use animator::{step, step_with, viewport_at, SceneConfig, SceneInputs, SceneState, DAMPING};
pub use particles::{Particle, ParticleField, ParticleInstance};
pub use pose::{lerp, Pose, Vec3};
