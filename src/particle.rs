use crate::rules::{ParticleType, TYPE_COUNT};
use crate::surface::{Bounds, Surface};
use crate::vec2::Vec2;

/// Fraction of the accumulated pairwise force folded into the velocity
/// each frame. Velocity is never reset, so forces integrate over time.
pub const FORCE_DAMPING: f32 = 0.5;

/// Radius shared by every particle, in world units. Doubles as the
/// near-field cutoff for the pairwise force.
pub const PARTICLE_RADIUS: f32 = 2.0;

/// One moving dot. Carries a copy of its type's rule row so force
/// lookups never touch shared state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub kind: ParticleType,
    rules: [f32; TYPE_COUNT],
}

impl Particle {
    /// Particle at rest at `position` with the standard radius.
    pub fn new(position: Vec2, kind: ParticleType, rules: [f32; TYPE_COUNT]) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius: PARTICLE_RADIUS,
            kind,
            rules,
        }
    }

    /// Net force from every other particle in `peers`. A peer at or
    /// inside `radius` contributes nothing; beyond it, it contributes the
    /// displacement scaled by `rule(peer type) / distance`, so each pair
    /// pulls or pushes with constant magnitude along the line between
    /// them. `self` is skipped by identity, and must be a member of
    /// `peers` for that skip to work.
    pub fn net_force(&self, peers: &[Particle]) -> Vec2 {
        let mut net = Vec2::ZERO;
        for other in peers {
            if std::ptr::eq(self, other) {
                continue;
            }
            let d = other.position.sub(self.position);
            let r = d.len();
            if r > self.radius {
                net = net.add(d.scale(self.rules[other.kind.index()] / r));
            }
        }
        debug_assert!(net.is_finite(), "non-finite force accumulated");
        net
    }

    /// Fold a net force into the velocity, damped by [`FORCE_DAMPING`].
    pub fn apply_force(&mut self, force: Vec2) {
        self.velocity = self.velocity.add(force.scale(FORCE_DAMPING));
    }

    /// Advance one frame: reflect the velocity on any axis whose
    /// pre-update position sits at or beyond a surface edge, then move.
    /// The lower edge on each axis is the layout offset, the upper edge
    /// the absolute extent.
    pub fn integrate(&mut self, bounds: Bounds) {
        if self.position.x <= bounds.left || self.position.x >= bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= bounds.top || self.position.y >= bounds.height {
            self.velocity.y = -self.velocity.y;
        }
        self.position = self.position.add(self.velocity);
    }

    /// Summed distance to every same-type peer, this particle's share of
    /// the world's stability metric. Lower means tighter clustering.
    pub fn stability(&self, peers: &[Particle]) -> f32 {
        let mut total = 0.0;
        for other in peers {
            if std::ptr::eq(self, other) || other.kind != self.kind {
                continue;
            }
            total += other.position.sub(self.position).len();
        }
        total
    }

    /// Draw as one filled circle keyed by type.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.radius, self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ParticleType::{Blue, Red};

    fn bounds() -> Bounds {
        Bounds {
            left: 0.0,
            top: 0.0,
            width: 950.0,
            height: 460.0,
        }
    }

    fn particle(x: f32, y: f32, kind: ParticleType, rules: [f32; TYPE_COUNT]) -> Particle {
        Particle::new(Vec2::new(x, y), kind, rules)
    }

    fn pull_row(target: ParticleType, strength: f32) -> [f32; TYPE_COUNT] {
        let mut row = [0.0; TYPE_COUNT];
        row[target.index()] = strength;
        row
    }

    #[test]
    fn force_beyond_radius_has_the_rule_magnitude() {
        // red pulls blue with 0.5 at 10 units: (0.5 / 10) * 10 on x
        let pts = vec![
            particle(100.0, 100.0, Red, pull_row(Blue, 0.5)),
            particle(110.0, 100.0, Blue, [0.0; TYPE_COUNT]),
        ];
        let f = pts[0].net_force(&pts);
        assert_eq!(f.x, (0.5 / 10.0) * 10.0);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn force_at_or_inside_radius_is_zero() {
        for dist in [0.5, 1.0, PARTICLE_RADIUS] {
            let pts = vec![
                particle(100.0, 100.0, Red, pull_row(Blue, 0.5)),
                particle(100.0 + dist, 100.0, Blue, [0.0; TYPE_COUNT]),
            ];
            assert_eq!(pts[0].net_force(&pts), Vec2::ZERO, "dist {dist}");
        }
    }

    #[test]
    fn zero_rule_exerts_no_force_at_any_distance() {
        for dist in [3.0, 50.0, 700.0] {
            let pts = vec![
                particle(10.0, 10.0, Red, [0.0; TYPE_COUNT]),
                particle(10.0 + dist, 10.0, Red, [0.0; TYPE_COUNT]),
            ];
            assert_eq!(pts[0].net_force(&pts), Vec2::ZERO);
        }
    }

    #[test]
    fn negative_rule_pushes_away() {
        let pts = vec![
            particle(100.0, 100.0, Red, pull_row(Blue, -0.3)),
            particle(120.0, 100.0, Blue, [0.0; TYPE_COUNT]),
        ];
        let f = pts[0].net_force(&pts);
        assert!(f.x < 0.0);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn forces_from_several_peers_accumulate() {
        // two blues pulling in opposite directions cancel exactly
        let pts = vec![
            particle(100.0, 100.0, Red, pull_row(Blue, 0.5)),
            particle(110.0, 100.0, Blue, [0.0; TYPE_COUNT]),
            particle(90.0, 100.0, Blue, [0.0; TYPE_COUNT]),
        ];
        assert_eq!(pts[0].net_force(&pts), Vec2::ZERO);
    }

    #[test]
    fn damped_force_accumulates_into_velocity() {
        // 0.5 * (0.5 / 10 * 10) = 0.25 into vx, then 0.25 into x
        let mut pts = vec![
            particle(100.0, 100.0, Red, pull_row(Blue, 0.5)),
            particle(110.0, 100.0, Blue, [0.0; TYPE_COUNT]),
        ];
        let f = pts[0].net_force(&pts);
        pts[0].apply_force(f);
        assert_eq!(pts[0].velocity, Vec2::new(0.25, 0.0));
        pts[0].integrate(bounds());
        assert_eq!(pts[0].position, Vec2::new(100.25, 100.0));

        // a second identical frame keeps adding, nothing resets
        let f = pts[0].net_force(&pts);
        pts[0].apply_force(f);
        assert!(pts[0].velocity.x > 0.25);
    }

    #[test]
    fn reflection_flips_only_the_crossed_axis() {
        let mut p = particle(0.0, 100.0, Red, [0.0; TYPE_COUNT]);
        p.velocity = Vec2::new(-1.5, 2.0);
        p.integrate(bounds());
        assert_eq!(p.velocity, Vec2::new(1.5, 2.0));
        assert_eq!(p.position, Vec2::new(1.5, 102.0));
    }

    #[test]
    fn reflection_uses_offset_lower_and_extent_upper_edges() {
        let b = Bounds {
            left: 8.0,
            top: 6.0,
            width: 300.0,
            height: 200.0,
        };

        // sitting on the layout offset on x
        let mut p = particle(8.0, 50.0, Red, [0.0; TYPE_COUNT]);
        p.velocity = Vec2::new(-2.0, 0.5);
        p.integrate(b);
        assert_eq!(p.velocity, Vec2::new(2.0, 0.5));
        assert_eq!(p.position, Vec2::new(10.0, 50.5));

        // sitting on the absolute extent on y
        let mut q = particle(50.0, 200.0, Red, [0.0; TYPE_COUNT]);
        q.velocity = Vec2::new(1.0, 3.0);
        q.integrate(b);
        assert_eq!(q.velocity, Vec2::new(1.0, -3.0));
        assert_eq!(q.position, Vec2::new(51.0, 197.0));
    }

    #[test]
    fn interior_particle_keeps_its_velocity() {
        let mut p = particle(100.0, 100.0, Red, [0.0; TYPE_COUNT]);
        p.velocity = Vec2::new(3.0, -4.0);
        p.integrate(bounds());
        assert_eq!(p.velocity, Vec2::new(3.0, -4.0));
        assert_eq!(p.position, Vec2::new(103.0, 96.0));
    }

    #[test]
    fn stability_sums_distances_to_same_type_peers_only() {
        let pts = vec![
            particle(0.0, 0.0, Red, [0.0; TYPE_COUNT]),
            particle(3.0, 4.0, Red, [0.0; TYPE_COUNT]),
            particle(6.0, 8.0, Red, [0.0; TYPE_COUNT]),
            particle(500.0, 0.0, Blue, [0.0; TYPE_COUNT]),
        ];
        // distances 5 and 10 from the first red; the blue is ignored
        assert_eq!(pts[0].stability(&pts), 15.0);
    }

    #[test]
    fn lone_type_has_zero_stability() {
        let pts = vec![
            particle(0.0, 0.0, Red, [0.0; TYPE_COUNT]),
            particle(9.0, 9.0, Blue, [0.0; TYPE_COUNT]),
        ];
        assert_eq!(pts[1].stability(&pts), 0.0);
    }
}
