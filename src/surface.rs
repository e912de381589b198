use crate::rules::ParticleType;
use crate::vec2::Vec2;

/// Drawing area geometry as reported by the hosting surface. `left` and
/// `top` are layout offsets, `width` and `height` the absolute extent;
/// boundary reflection compares positions against these values directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Where particles land each frame. Each world owns one surface; the
/// simulation clears it and issues one filled circle per particle.
pub trait Surface {
    fn bounds(&self) -> Bounds;
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, kind: ParticleType);
}

/// Surface that reports fixed bounds and discards every primitive.
/// Headless runs and tests draw here.
pub struct NullSurface {
    bounds: Bounds,
}

impl NullSurface {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }
}

impl Surface for NullSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _kind: ParticleType) {}
}
