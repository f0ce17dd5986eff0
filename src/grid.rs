use crate::mask::{reticle_mask, Field, BULLSEYE_RADIUS, GRID_H, GRID_W};
use crate::style::{glyph_width, Rgb, DANGER, SCATTER};
use log::debug;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// 20 katakana (wide) followed by 16 hex digits (narrow).
pub(crate) const GLYPHS: [char; 36] = [
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D',
    'E', 'F',
];

/// Columns left of this belong to the title text and never show reticle glyphs.
pub(crate) const TEXT_ZONE_END: usize = 36;

const LAYOUT_SEED: u64 = 42;
const DRAW_SEED: u64 = 77;

const SCATTER_CHANCE: f64 = 0.05;
const GLOW: (f64, f64, f64) = (40.0, 50.0, 40.0);

/// Density tier: cells brighter than `above` are kept with probability `keep`
/// (always when `None`) at an opacity of `(base + span * u) / 255`.
struct Tier {
    above: f64,
    keep: Option<f64>,
    base: f64,
    span: f64,
}

const TIERS: [Tier; 4] = [
    Tier {
        above: 180.0,
        keep: None,
        base: 200.0,
        span: 55.0,
    },
    Tier {
        above: 120.0,
        keep: Some(0.8),
        base: 120.0,
        span: 90.0,
    },
    Tier {
        above: 60.0,
        keep: Some(0.5),
        base: 60.0,
        span: 80.0,
    },
    Tier {
        above: 25.0,
        keep: Some(0.2),
        base: 25.0,
        span: 45.0,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PlacedChar {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) glyph: char,
    pub(crate) color: Rgb,
    pub(crate) dist: f64,
}

impl PlacedChar {
    pub(crate) fn width(&self) -> usize {
        glyph_width(self.glyph)
    }

    pub(crate) fn outside_text_zone(&self) -> bool {
        self.col >= TEXT_ZONE_END
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Seeds {
    pub(crate) layout: u64,
    pub(crate) draw: u64,
}

impl Default for Seeds {
    fn default() -> Self {
        Self {
            layout: LAYOUT_SEED,
            draw: DRAW_SEED,
        }
    }
}

/// The process-wide reticle, built once from the fixed seeds.
pub(crate) static RETICLE: Lazy<Vec<PlacedChar>> = Lazy::new(|| generate(Seeds::default()));

struct Occupancy {
    cells: Vec<bool>,
}

impl Occupancy {
    // one spare column so a wide glyph can always look right
    const STRIDE: usize = GRID_W + 1;

    fn new() -> Self {
        Self {
            cells: vec![false; Self::STRIDE * GRID_H],
        }
    }

    fn is_taken(&self, x: usize, y: usize) -> bool {
        self.cells[y * Self::STRIDE + x]
    }

    /// Claims `width` cells starting at (x,y). Refuses glyphs that would run
    /// off the grid or land on a taken neighbour.
    fn claim(&mut self, x: usize, y: usize, width: usize) -> bool {
        if x + width > GRID_W {
            return false;
        }
        if (x..x + width).any(|cx| self.is_taken(cx, y)) {
            return false;
        }
        for cx in x..x + width {
            self.cells[y * Self::STRIDE + cx] = true;
        }
        true
    }
}

/// Opacity for a cell of brightness `bv`, or `None` when the density gate drops it.
fn opacity(bv: f64, draw: &mut StdRng) -> Option<f64> {
    let tier = TIERS.iter().find(|t| bv > t.above)?;
    if let Some(p) = tier.keep {
        if draw.gen::<f64>() >= p {
            return None;
        }
    }
    Some((tier.base + draw.gen::<f64>() * tier.span) / 255.0)
}

/// Danger red with a little red/green jitter, faded onto black by `alpha`.
fn shade(alpha: f64, draw: &mut StdRng, glow: bool) -> Rgb {
    let r = (DANGER.r as f64 + (draw.gen::<f64>() - 0.5) * 30.0).min(255.0);
    let g = (DANGER.g as f64 + (draw.gen::<f64>() - 0.5) * 12.0).min(255.0);
    let (mut r, mut g, mut b) = (r * alpha, g * alpha, DANGER.b as f64 * alpha);
    if glow {
        r += GLOW.0;
        g += GLOW.1;
        b += GLOW.2;
    }
    Rgb::from_f64(r, g, b)
}

pub(crate) fn generate(seeds: Seeds) -> Vec<PlacedChar> {
    let mut layout = StdRng::seed_from_u64(seeds.layout);
    let mut draw = StdRng::seed_from_u64(seeds.draw);
    let mut occupied = Occupancy::new();
    let mut out = Vec::new();

    for y in 0..GRID_H {
        for x in 0..GRID_W {
            if occupied.is_taken(x, y) {
                continue;
            }

            let bv = reticle_mask(x, y);
            let field = Field::at(x, y);
            let glyph = GLYPHS[layout.gen_range(0..GLYPHS.len())];

            let color = if bv <= 0.0 {
                if layout.gen::<f64>() >= SCATTER_CHANCE {
                    continue;
                }
                SCATTER
            } else {
                let Some(alpha) = opacity(bv, &mut draw) else {
                    continue;
                };
                shade(alpha, &mut draw, field.nd < BULLSEYE_RADIUS)
            };

            if !occupied.claim(x, y, glyph_width(glyph)) {
                continue;
            }
            out.push(PlacedChar {
                row: y,
                col: x,
                glyph,
                color,
                dist: field.dist,
            });
        }
    }

    debug!("reticle: {} glyphs placed", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seeds_same_reticle() {
        let a = generate(Seeds::default());
        let b = generate(Seeds::default());
        assert!(!a.is_empty());
        assert_eq!(a, b);
        assert_eq!(*RETICLE, a);
    }

    #[test]
    fn seeds_are_substitutable() {
        let a = generate(Seeds::default());
        let b = generate(Seeds {
            layout: 1,
            draw: 2,
        });
        assert_ne!(a, b);
    }

    #[test]
    fn no_two_glyphs_share_a_cell() {
        let mut seen = HashSet::new();
        for c in RETICLE.iter() {
            assert!(c.col + c.width() <= GRID_W, "{c:?} overflows the grid");
            for cx in c.col..c.col + c.width() {
                assert!(seen.insert((c.row, cx)), "cell ({}, {cx}) claimed twice", c.row);
            }
        }
    }

    #[test]
    fn placement_is_row_major() {
        for pair in RETICLE.windows(2) {
            assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }
    }

    #[test]
    fn empty_field_only_gets_dim_scatter() {
        for c in RETICLE.iter() {
            if reticle_mask(c.col, c.row) <= 0.0 {
                assert_eq!(c.color, SCATTER);
            } else {
                assert_ne!(c.color, SCATTER);
            }
        }
    }

    #[test]
    fn faint_cells_never_pass_the_gate() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert_eq!(opacity(25.0, &mut rng), None);
            assert_eq!(opacity(10.0, &mut rng), None);
        }
    }

    #[test]
    fn bright_cells_always_pass() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let a = opacity(220.0, &mut rng).unwrap();
            assert!((200.0 / 255.0..=1.0).contains(&a), "{a}");
        }
    }

    #[test]
    fn mid_tier_is_sometimes_dropped() {
        let mut rng = StdRng::seed_from_u64(9);
        let kept: Vec<f64> = (0..500).filter_map(|_| opacity(150.0, &mut rng)).collect();
        assert!(!kept.is_empty() && kept.len() < 500);
        for a in kept {
            assert!((120.0 / 255.0..=210.0 / 255.0).contains(&a), "{a}");
        }
    }

    #[test]
    fn glow_adds_on_top_of_the_shade() {
        let plain = shade(0.5, &mut StdRng::seed_from_u64(3), false);
        let lit = shade(0.5, &mut StdRng::seed_from_u64(3), true);
        assert_eq!(lit.r, plain.r + 40);
        assert_eq!(lit.g, plain.g + 50);
        assert_eq!(lit.b, plain.b + 40);
    }

    #[test]
    fn glow_clamps_at_full_opacity() {
        let lit = shade(1.0, &mut StdRng::seed_from_u64(3), true);
        assert_eq!(lit.r, 255);
        assert!(lit.g >= 95);
    }

    #[test]
    fn wide_glyph_refused_at_the_right_edge() {
        let mut occ = Occupancy::new();
        assert!(!occ.claim(GRID_W - 1, 0, 2));
        assert!(occ.claim(GRID_W - 1, 0, 1));
        assert!(occ.claim(10, 3, 2));
        assert!(occ.is_taken(11, 3));
        assert!(!occ.claim(11, 3, 1));
        assert!(!occ.claim(9, 3, 2));
    }
}
