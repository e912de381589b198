use crate::rules::{ParticleType, ALL_TYPES, TYPE_COUNT};
use crate::surface::{Bounds, Surface};
use crate::vec2::Vec2;
use ratatui::style::Color;

/// Braille character rendering for high-resolution terminal graphics.
/// Each Braille character represents a 2x4 grid of dots (8 dots total).
///
/// Dot positions and their bit values:
/// ```
/// (0,0)=0x01  (1,0)=0x08
/// (0,1)=0x02  (1,1)=0x10
/// (0,2)=0x04  (1,2)=0x20
/// (0,3)=0x40  (1,3)=0x80
/// ```
///
/// Unicode Braille patterns: U+2800 to U+28FF (256 patterns)
const BRAILLE_BASE: u32 = 0x2800;

/// Dot position to bit mapping for Braille characters
const BRAILLE_DOTS: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40], // Left column (x=0): rows 0,1,2,3
    [0x08, 0x10, 0x20, 0x80], // Right column (x=1): rows 0,1,2,3
];

/// A single rendered Braille cell with position and color
#[derive(Clone, Copy)]
pub struct BrailleCell {
    pub x: u16,
    pub y: u16,
    pub char: char,
    pub color: Color,
}

/// Drawing surface for one world. World coordinates scale down onto a
/// 2x4-dots-per-cell Braille grid; each occupied cell takes the color of
/// the particle type that hit the most of its dots.
pub struct BrailleCanvas {
    bounds: Bounds,
    cols: u16,
    rows: u16,
    /// One dot bitmask per character cell.
    dots: Vec<u8>,
    /// Per-cell dot hits by particle type, for the dominant color.
    hits: Vec<[u16; TYPE_COUNT]>,
}

impl BrailleCanvas {
    /// Canvas covering `bounds` world units, rendered into `cols` x
    /// `rows` character cells.
    pub fn new(bounds: Bounds, cols: u16, rows: u16) -> Self {
        let cells = cols as usize * rows as usize;
        Self {
            bounds,
            cols,
            rows,
            dots: vec![0; cells],
            hits: vec![[0; TYPE_COUNT]; cells],
        }
    }

    /// Change the character area. Display-only: the world bounds that the
    /// physics reflects against are untouched.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        let cells = cols as usize * rows as usize;
        self.dots = vec![0; cells];
        self.hits = vec![[0; TYPE_COUNT]; cells];
    }

    fn dot_width(&self) -> f32 {
        self.cols as f32 * 2.0
    }

    fn dot_height(&self) -> f32 {
        self.rows as f32 * 4.0
    }

    /// Set a single dot, given dot-grid coordinates. Out-of-range dots
    /// are clipped.
    fn plot(&mut self, dot_x: i32, dot_y: i32, kind: ParticleType) {
        if dot_x < 0 || dot_y < 0 {
            return;
        }
        let (dot_x, dot_y) = (dot_x as usize, dot_y as usize);
        if dot_x >= self.cols as usize * 2 || dot_y >= self.rows as usize * 4 {
            return;
        }
        let cell = (dot_y / 4) * self.cols as usize + dot_x / 2;
        self.dots[cell] |= BRAILLE_DOTS[dot_x % 2][dot_y % 4];
        self.hits[cell][kind.index()] += 1;
    }

    /// Occupied cells with their dominant-type color, for the UI layer.
    pub fn cells(&self) -> impl Iterator<Item = BrailleCell> + '_ {
        let cols = self.cols as usize;
        self.dots.iter().enumerate().filter_map(move |(i, &pattern)| {
            if pattern == 0 {
                return None;
            }
            let counts = &self.hits[i];
            let dominant = ALL_TYPES
                .iter()
                .copied()
                .max_by_key(|kind| counts[kind.index()])
                .unwrap_or(ParticleType::Red);
            Some(BrailleCell {
                x: (i % cols) as u16,
                y: (i / cols) as u16,
                char: char::from_u32(BRAILLE_BASE + pattern as u32).unwrap_or(' '),
                color: dominant.color(),
            })
        })
    }
}

impl Surface for BrailleCanvas {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear(&mut self) {
        self.dots.fill(0);
        for hit in self.hits.iter_mut() {
            *hit = [0; TYPE_COUNT];
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, kind: ParticleType) {
        let scale_x = self.dot_width() / self.bounds.width;
        let scale_y = self.dot_height() / self.bounds.height;
        let cx = center.x * scale_x;
        let cy = center.y * scale_y;
        let rx = radius * scale_x;
        let ry = radius * scale_y;

        // The center dot always lands; a world-space circle usually
        // shrinks below a single dot at terminal scale.
        self.plot(cx.floor() as i32, cy.floor() as i32, kind);
        if rx < 0.5 && ry < 0.5 {
            return;
        }

        let x0 = (cx - rx).floor() as i32;
        let x1 = (cx + rx).floor() as i32;
        let y0 = (cy - ry).floor() as i32;
        let y1 = (cy + ry).floor() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let ex = (x as f32 + 0.5 - cx) / rx.max(0.5);
                let ey = (y as f32 + 0.5 - cy) / ry.max(0.5);
                if ex * ex + ey * ey <= 1.0 {
                    self.plot(x, y, kind);
                }
            }
        }
    }
}
