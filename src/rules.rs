use rand::rngs::StdRng;
use rand::Rng;
use ratatui::style::Color;

/// Number of particle types in a world.
pub const TYPE_COUNT: usize = 4;

/// The four particle types. Each type doubles as its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleType {
    Red,
    Blue,
    Green,
    Yellow,
}

/// All types in population order. Worlds spawn their particles type by
/// type in this order, which the in-place update pass makes observable.
pub const ALL_TYPES: [ParticleType; TYPE_COUNT] = [
    ParticleType::Red,
    ParticleType::Blue,
    ParticleType::Green,
    ParticleType::Yellow,
];

impl ParticleType {
    /// Terminal color used when drawing this type.
    pub fn color(&self) -> Color {
        match self {
            ParticleType::Red => Color::Red,
            ParticleType::Blue => Color::Blue,
            ParticleType::Green => Color::Green,
            ParticleType::Yellow => Color::Yellow,
        }
    }

    /// Row/column index into a rule matrix.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-world attraction coefficients, indexed by (acting type, other
/// type). Positive pulls, negative pushes. Drawn once at world
/// construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatrix {
    coefficients: [[f32; TYPE_COUNT]; TYPE_COUNT],
}

impl RuleMatrix {
    /// Fresh matrix with every entry uniform in [-0.5, 0.5).
    pub fn random(rng: &mut StdRng) -> Self {
        let mut coefficients = [[0.0; TYPE_COUNT]; TYPE_COUNT];
        for row in coefficients.iter_mut() {
            for value in row.iter_mut() {
                *value = rng.gen_range(-0.5..0.5);
            }
        }
        Self { coefficients }
    }

    /// Fixed matrix, for deterministic test setups.
    #[cfg(test)]
    pub fn from_coefficients(coefficients: [[f32; TYPE_COUNT]; TYPE_COUNT]) -> Self {
        Self { coefficients }
    }

    /// Coefficient applied by `acting` toward `other`.
    pub fn get(&self, acting: ParticleType, other: ParticleType) -> f32 {
        self.coefficients[acting.index()][other.index()]
    }

    /// The full coefficient row for one acting type, indexed by the
    /// other particle's type.
    pub fn row(&self, acting: ParticleType) -> [f32; TYPE_COUNT] {
        self.coefficients[acting.index()]
    }
}
