//! Instanced particle field drifting around the core.

use std::f32::consts::PI;

use rand::Rng;

use crate::scene::animator::REFERENCE_FRAME;
use crate::scene::pose::Vec3;

/// Common period of every phase term in [`Particle::instance`]
pub const PHASE_PERIOD: f32 = 20.0 * PI;

/// One pseudo-orbit. All parameters are fixed at creation except `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub t: f32,
    pub factor: f32,
    pub speed: f32,
    pub x_factor: f32,
    pub y_factor: f32,
    pub z_factor: f32,
}

/// World transform of one particle for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleInstance {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            t: rng.random_range(0.0..100.0),
            factor: rng.random_range(20.0..120.0),
            speed: rng.random_range(0.01..0.015),
            x_factor: rng.random_range(-50.0..50.0),
            y_factor: rng.random_range(-50.0..50.0),
            z_factor: rng.random_range(-50.0..50.0),
        }
    }

    pub fn instance(&self) -> ParticleInstance {
        let t = self.t;
        let f = self.factor;
        let s = t.cos();

        ParticleInstance {
            position: Vec3::new(
                (self.x_factor + (t / 10.0).cos() * f + t.sin() * f / 10.0) / 15.0,
                (self.y_factor + (t / 10.0).sin() * f + (t * 2.0).cos() * f / 10.0) / 15.0,
                (self.z_factor + (t / 10.0).cos() * f + (t * 3.0).sin() * f / 10.0) / 15.0,
            ),
            scale: Vec3::splat(s),
            rotation: Vec3::splat(s * 5.0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Regenerate the whole field if the requested count differs.
    /// Returns `true` when it did.
    pub fn ensure_count<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> bool {
        if self.particles.len() == count {
            return false;
        }
        tracing::debug!(from = self.particles.len(), to = count, "Regenerating particle field");
        *self = Self::new(count, rng);
        true
    }

    /// Move every particle's phase forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let frames = dt.max(0.0) / REFERENCE_FRAME;
        for p in &mut self.particles {
            // Wrapped so long sessions keep f32 precision
            p.t = (p.t + p.speed / 2.0 * frames).rem_euclid(PHASE_PERIOD);
        }
    }

    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles.iter().map(Particle::instance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_field_has_requested_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let field = ParticleField::new(40, &mut rng);
        assert_eq!(field.len(), 40);
        assert_eq!(field.instances().len(), 40);
    }

    #[test]
    fn test_creation_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = ParticleField::new(500, &mut rng);
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.t));
            assert!((20.0..120.0).contains(&p.factor));
            assert!((0.01..0.015).contains(&p.speed));
            assert!((-50.0..50.0).contains(&p.x_factor));
            assert!((-50.0..50.0).contains(&p.y_factor));
            assert!((-50.0..50.0).contains(&p.z_factor));
        }
    }

    #[test]
    fn test_seeded_snapshot_is_reproducible() {
        let mut a = ParticleField::new(20, &mut StdRng::seed_from_u64(99));
        let mut b = ParticleField::new(20, &mut StdRng::seed_from_u64(99));
        for _ in 0..10 {
            a.advance(REFERENCE_FRAME);
            b.advance(REFERENCE_FRAME);
        }
        assert_eq!(a.instances(), b.instances());
    }

    #[test]
    fn test_scale_and_rotation_follow_phase() {
        let mut field = ParticleField::new(20, &mut StdRng::seed_from_u64(5));
        field.advance(0.5);
        for (p, inst) in field.particles().iter().zip(field.instances()) {
            let s = p.t.cos();
            assert_eq!(inst.scale, Vec3::splat(s));
            assert_eq!(inst.rotation, Vec3::splat(5.0 * s));
        }
    }

    #[test]
    fn test_advance_uses_half_speed_per_frame() {
        let mut field = ParticleField::new(3, &mut StdRng::seed_from_u64(2));
        let before: Vec<Particle> = field.particles().to_vec();
        field.advance(REFERENCE_FRAME);
        for (old, new) in before.iter().zip(field.particles()) {
            let expected = (old.t + old.speed / 2.0).rem_euclid(PHASE_PERIOD);
            assert!((new.t - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_phase_wraps_without_changing_pose() {
        let p = Particle {
            t: PHASE_PERIOD - 0.001,
            factor: 80.0,
            speed: 0.012,
            x_factor: 10.0,
            y_factor: -20.0,
            z_factor: 5.0,
        };
        let mut field = ParticleField { particles: vec![p] };

        // Two hours at 60 Hz
        for _ in 0..432_000 {
            field.advance(REFERENCE_FRAME);
        }
        let wrapped = field.particles()[0];
        assert!((0.0..PHASE_PERIOD).contains(&wrapped.t));

        let unwrapped = Particle {
            t: wrapped.t + PHASE_PERIOD,
            ..wrapped
        };
        let a = wrapped.instance();
        let b = unwrapped.instance();
        assert!((a.position.x - b.position.x).abs() < 1e-3);
        assert!((a.position.y - b.position.y).abs() < 1e-3);
        assert!((a.position.z - b.position.z).abs() < 1e-3);
        assert!((a.scale.x - b.scale.x).abs() < 1e-3);
    }

    #[test]
    fn test_ensure_count_regenerates_only_on_change() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = ParticleField::new(40, &mut rng);
        assert!(!field.ensure_count(40, &mut rng));
        assert!(field.ensure_count(20, &mut rng));
        assert_eq!(field.len(), 20);
    }
}
