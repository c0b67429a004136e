//! Minimal 3D vector and direction types for claw motion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position in scene units. Z is carried through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Linear interpolation from `a` to `b`; `t` is clamped to `[0, 1]`.
    pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        Vec3 {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
            z: a.z + (b.z - a.z) * t,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Horizontal travel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Raised when an integer axis value is neither -1 nor +1.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Invalid direction {0}, expected -1 or 1")]
pub struct InvalidDirection(pub i32);

impl TryFrom<i32> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            other => Err(InvalidDirection(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = Vec3::new(1.0, -4.0, 2.0);
        let b = Vec3::new(-3.0, 5.0, 2.0);
        assert_eq!(Vec3::lerp(a, b, 0.0), a);
        assert_eq!(Vec3::lerp(a, b, 1.0), b);
        assert_eq!(Vec3::lerp(a, b, 0.5), Vec3::new(-1.0, 0.5, 2.0));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(Vec3::lerp(a, b, -1.0), a);
        assert_eq!(Vec3::lerp(a, b, 7.0), b);
    }

    #[test]
    fn direction_from_axis() {
        assert_eq!(Direction::try_from(-1), Ok(Direction::Left));
        assert_eq!(Direction::try_from(1), Ok(Direction::Right));
        assert_eq!(Direction::try_from(0), Err(InvalidDirection(0)));
        assert_eq!(Direction::try_from(2), Err(InvalidDirection(2)));
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}
