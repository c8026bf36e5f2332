//! Fractal Explorer - Sierpinski triangle by recursive subdivision
//!
//! Coordinates live in a 300 x ~260 space with y growing downwards, the same
//! space the panel canvas maps onto.

use std::ops::RangeInclusive;
use tracing::debug;

/// Side length of the root triangle
pub const CANVAS_WIDTH: f64 = 300.0;

/// Height band reserved for the drawing (root height is 300·√3/2 ≈ 259.8)
pub const CANVAS_HEIGHT: f64 = 260.0;

pub const DEPTH_RANGE: RangeInclusive<u32> = 0..=6;
pub const DEFAULT_DEPTH: u32 = 3;

/// log 3 / log 2, shown as a fixed label
pub const HAUSDORFF_DIMENSION: f64 = 1.585;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub apex: Point,
    pub base_left: Point,
    pub base_right: Point,
}

impl Triangle {
    /// Edges as point pairs, for line-drawing backends
    pub fn edges(&self) -> [(Point, Point); 3] {
        [
            (self.base_left, self.apex),
            (self.apex, self.base_right),
            (self.base_right, self.base_left),
        ]
    }
}

fn height_of(size: f64) -> f64 {
    size * 3f64.sqrt() / 2.0
}

/// All leaf triangles for `depth`; always exactly `3^depth` of them
pub fn generate(depth: u32) -> Vec<Triangle> {
    let mut out = Vec::with_capacity(triangle_count(depth));
    subdivide(0.0, 0.0, CANVAS_WIDTH, depth, &mut out);
    out
}

fn subdivide(x: f64, y: f64, size: f64, depth: u32, out: &mut Vec<Triangle>) {
    if depth == 0 {
        let h = height_of(size);
        out.push(Triangle {
            apex: Point::new(x + size / 2.0, y),
            base_left: Point::new(x, y + h),
            base_right: Point::new(x + size, y + h),
        });
        return;
    }

    let half = size / 2.0;
    let h = height_of(half);
    subdivide(x, y + h, half, depth - 1, out);
    subdivide(x + half / 2.0, y, half, depth - 1, out);
    subdivide(x + half, y + h, half, depth - 1, out);
}

pub fn triangle_count(depth: u32) -> usize {
    3usize.pow(depth)
}

/// Slider state plus the derived triangle set
#[derive(Debug, Clone)]
pub struct FractalExplorer {
    depth: u32,
    triangles: Vec<Triangle>,
}

impl Default for FractalExplorer {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl FractalExplorer {
    pub fn new(depth: u32) -> Self {
        let depth = clamp_depth(depth);
        Self {
            depth,
            triangles: generate(depth),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        triangle_count(self.depth)
    }

    /// Move the slider; out-of-range values are clamped
    pub fn set_depth(&mut self, depth: u32) {
        let depth = clamp_depth(depth);
        if depth != self.depth {
            self.depth = depth;
            self.triangles = generate(depth);
            debug!(depth, triangles = self.triangles.len(), "fractal: depth changed");
        }
    }

    pub fn increase(&mut self) {
        self.set_depth(self.depth.saturating_add(1));
    }

    pub fn decrease(&mut self) {
        self.set_depth(self.depth.saturating_sub(1));
    }
}

fn clamp_depth(depth: u32) -> u32 {
    depth.clamp(*DEPTH_RANGE.start(), *DEPTH_RANGE.end())
}
