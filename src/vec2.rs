/// Immutable 2D vector. Every operation returns a new value, so chained
/// calls apply strictly left to right: `v.add(a).scale(k)` is `(v + a) * k`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn scale(self, k: f32) -> Vec2 {
        Vec2 {
            x: self.x * k,
            y: self.y * k,
        }
    }

    /// Euclidean length.
    pub fn len(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// True when both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_scale_applies_left_to_right() {
        let v = Vec2::new(1.0, 2.0);
        let a = Vec2::new(3.0, -1.0);
        let out = v.add(a).scale(2.0);
        // (v + a) * k, not v + a * k
        assert_eq!(out, Vec2::new(8.0, 2.0));
        assert_ne!(out, v.add(a.scale(2.0)));
        // operands untouched
        assert_eq!(v, Vec2::new(1.0, 2.0));
        assert_eq!(a, Vec2::new(3.0, -1.0));
    }

    #[test]
    fn scale_then_add_differs_from_add_then_scale() {
        let v = Vec2::new(1.0, 1.0);
        let a = Vec2::new(2.0, 0.0);
        assert_ne!(v.add(a).scale(3.0), v.scale(3.0).add(a));
    }

    #[test]
    fn len_is_euclidean() {
        assert_eq!(Vec2::new(3.0, 4.0).len(), 5.0);
        assert_eq!(Vec2::new(-3.0, 4.0).len(), 5.0);
        assert_eq!(Vec2::ZERO.len(), 0.0);
    }

    #[test]
    fn sub_points_from_other_to_self() {
        let d = Vec2::new(5.0, 7.0).sub(Vec2::new(2.0, 3.0));
        assert_eq!(d, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn is_finite_rejects_nan_and_infinity() {
        assert!(Vec2::new(1.0, -2.5).is_finite());
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(!Vec2::new(0.0, f32::INFINITY).is_finite());
    }
}
