//! Reticle brightness field.
//!
//! Every grid cell maps to a brightness in [0,255]; zero means "no reticle here".
//! The shape is a stack of probes checked in a fixed order, and the first
//! probe that fires decides the cell.

use std::f64::consts::{PI, TAU};

pub(crate) const GRID_W: usize = 80;
pub(crate) const GRID_H: usize = 26;

pub(crate) const CENTER_X: f64 = 58.0;
pub(crate) const CENTER_Y: f64 = 13.0;
pub(crate) const MAX_RADIUS: f64 = 12.0;

/// Normalized radius of the hot spot.
pub(crate) const BULLSEYE_RADIUS: f64 = 0.08;

struct RingBand {
    inner: f64,
    outer: f64,
    brightness: f64,
}

const RING_BANDS: [RingBand; 4] = [
    RingBand {
        inner: 0.20,
        outer: 0.26,
        brightness: 220.0,
    },
    RingBand {
        inner: 0.44,
        outer: 0.50,
        brightness: 190.0,
    },
    RingBand {
        inner: 0.68,
        outer: 0.74,
        brightness: 150.0,
    },
    RingBand {
        inner: 0.90,
        outer: 1.00,
        brightness: 100.0,
    },
];

const TICK_RADII: [f64; 4] = [0.23, 0.47, 0.71, 0.95];

const CROSSHAIR: f64 = 110.0;
const TICK: f64 = 80.0;
const BRACKET: f64 = 90.0;
const NOTCH: f64 = 100.0;

/// Geometry of one cell relative to the reticle center.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Field {
    pub(crate) dx: f64,
    pub(crate) dy: f64,
    pub(crate) dist: f64,
    pub(crate) nd: f64,
}

impl Field {
    pub(crate) fn at(x: usize, y: usize) -> Self {
        // cells are about twice as tall as they are wide
        let dx = (x as f64 - CENTER_X) / 2.0;
        let dy = y as f64 - CENTER_Y;
        let dist = (dx * dx + dy * dy).sqrt();
        Self {
            dx,
            dy,
            dist,
            nd: dist / MAX_RADIUS,
        }
    }

    fn angle(&self) -> f64 {
        self.dy.atan2(self.dx)
    }
}

type Probe = fn(&Field) -> Option<f64>;

/// Precedence order. Do not reorder.
const PROBES: [Probe; 6] = [
    ring_band,
    bullseye,
    crosshair,
    tick_mark,
    corner_bracket,
    diagonal_notch,
];

pub(crate) fn reticle_mask(x: usize, y: usize) -> f64 {
    brightness(&Field::at(x, y))
}

fn brightness(f: &Field) -> f64 {
    PROBES.iter().find_map(|probe| probe(f)).unwrap_or(0.0)
}

/// Shortest distance between two angles, in `[0, π]` for any inputs.
fn angular_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

fn ring_band(f: &Field) -> Option<f64> {
    RING_BANDS
        .iter()
        .find(|band| f.nd >= band.inner && f.nd <= band.outer)
        .map(|band| band.brightness)
}

fn bullseye(f: &Field) -> Option<f64> {
    (f.nd < BULLSEYE_RADIUS).then_some(255.0)
}

fn crosshair(f: &Field) -> Option<f64> {
    let adx = f.dx.abs() / MAX_RADIUS;
    let ady = f.dy.abs() / MAX_RADIUS;
    let arm = |across: f64, along: f64| across < 0.02 && along > 0.10 && along < 1.05;
    (arm(ady, adx) || arm(adx, ady)).then_some(CROSSHAIR)
}

fn tick_mark(f: &Field) -> Option<f64> {
    let angle = f.angle();
    for radius in TICK_RADII {
        if (f.nd - radius).abs() >= 0.045 {
            continue;
        }
        // every 10 degrees, minus the four cardinal points
        let hit = (0..36)
            .filter(|t| t % 9 != 0)
            .map(|t| t as f64 / 36.0 * TAU)
            .any(|tick| angular_gap(angle, tick) < 0.06);
        if hit {
            return Some(TICK);
        }
    }
    None
}

fn corner_bracket(f: &Field) -> Option<f64> {
    let nx = f.dx / MAX_RADIUS;
    let ny = f.dy / MAX_RADIUS;
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            let bx: f64 = sx * 1.08;
            let by: f64 = sy * 1.08;
            let horizontal = (ny - by).abs() < 0.025
                && nx * sx <= bx * sx
                && nx * sx >= (bx - sx * 0.12) * sx;
            let vertical = (nx - bx).abs() < 0.025
                && ny * sy <= by * sy
                && ny * sy >= (by - sy * 0.12) * sy;
            if horizontal || vertical {
                return Some(BRACKET);
            }
        }
    }
    None
}

fn diagonal_notch(f: &Field) -> Option<f64> {
    if f.nd <= 0.94 || f.nd >= 1.06 {
        return None;
    }
    let angle = f.angle();
    [PI / 4.0, 3.0 * PI / 4.0, -3.0 * PI / 4.0, -PI / 4.0]
        .into_iter()
        .any(|diag| angular_gap(angle, diag) < 0.05)
        .then_some(NOTCH)
}
