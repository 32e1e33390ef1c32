//! Small vector/pose types for the scene: lerp, Euler rotation and the
//! object-to-world transform.

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Component-wise linear interpolation
    pub fn lerp(self, target: Vec3, t: f32) -> Vec3 {
        Vec3::new(
            lerp(self.x, target.x, t),
            lerp(self.y, target.y, t),
            lerp(self.z, target.z, t),
        )
    }

    /// Rotate by Euler angles in XYZ order (matrix `Rx * Ry * Rz`), so the
    /// Z rotation reaches the vector first.
    pub fn rotate(self, euler: Vec3) -> Vec3 {
        let (sx, cx) = euler.x.sin_cos();
        let (sy, cy) = euler.y.sin_cos();
        let (sz, cz) = euler.z.sin_cos();

        // Z axis
        let x1 = self.x * cz - self.y * sz;
        let y1 = self.x * sz + self.y * cz;
        // Y axis
        let x2 = x1 * cy + self.z * sy;
        let z2 = -x1 * sy + self.z * cy;
        // X axis
        let y3 = y1 * cx - z2 * sx;
        let z3 = y1 * sx + z2 * cx;

        Vec3::new(x2, y3, z3)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Position, Euler rotation and uniform scale of an animated object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Pose {
    /// Transform a point from object space into world space.
    pub fn apply(&self, local: Vec3) -> Vec3 {
        (local * self.scale).rotate(self.rotation) + self.position
    }
}

/// `a + (b - a) * t`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.25), 4.0);
    }

    #[test]
    fn test_rotate_quarter_turns() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        // About Y: +X goes to -Z
        assert!(close(x.rotate(Vec3::new(0.0, FRAC_PI_2, 0.0)), Vec3::new(0.0, 0.0, -1.0)));
        // About Z: +X goes to +Y
        assert!(close(x.rotate(Vec3::new(0.0, 0.0, FRAC_PI_2)), Vec3::new(0.0, 1.0, 0.0)));
        // About X: +Y goes to +Z
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert!(close(y.rotate(Vec3::new(FRAC_PI_2, 0.0, 0.0)), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_applies_z_before_x() {
        // Z takes +X to +Y, then X takes +Y to +Z
        let v = Vec3::new(1.0, 0.0, 0.0).rotate(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        assert!(close(v, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_pose_apply_scales_then_translates() {
        let pose = Pose {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
            scale: 2.0,
        };
        assert!(close(pose.apply(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(3.0, 2.0, 3.0)));
    }
}
