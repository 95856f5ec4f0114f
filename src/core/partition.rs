use std::collections::HashMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PathData, PlotPoint, PlotRect};
use crate::error::{ChartError, ChartResult};

const EDGE_EPSILON: f64 = 1e-9;

type Ring = SmallVec<[PlotPoint; 12]>;

/// Axis-aligned clip box `[x0, x1] x [y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ClipRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> ChartResult<Self> {
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) || x1 <= x0 || y1 <= y0 {
            return Err(ChartError::InvalidData(
                "clip rect must be finite with positive size".to_owned(),
            ));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    #[must_use]
    pub fn from_plot(plot: PlotRect) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: plot.width,
            y1: plot.height,
        }
    }

    #[must_use]
    pub fn area(self) -> f64 {
        (self.x1 - self.x0) * (self.y1 - self.y0)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }

    fn ring(self) -> Ring {
        SmallVec::from_slice(&[
            PlotPoint::new(self.x0, self.y0),
            PlotPoint::new(self.x1, self.y0),
            PlotPoint::new(self.x1, self.y1),
            PlotPoint::new(self.x0, self.y1),
        ])
    }
}

/// Region of the clip box nearer to `owner_index`'s point than to any other.
///
/// The polygon is convex and listed without repeating its first vertex. An
/// empty polygon marks a point that coincides with an earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoronoiCell {
    pub owner_index: usize,
    pub polygon: Vec<PlotPoint>,
}

impl VoronoiCell {
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.polygon.len() < 3
    }

    /// Shoelace area, always non-negative.
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.polygon.len();
        if n < 3 {
            return 0.0;
        }
        let twice = (0..n)
            .map(|i| {
                let a = self.polygon[i];
                let b = self.polygon[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>();
        twice.abs() / 2.0
    }

    /// Inclusive containment test with a small tolerance on the boundary.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.polygon.len();
        if n < 3 {
            return false;
        }
        let orientation = self.orientation();
        (0..n).all(|i| {
            let a = self.polygon[i];
            let b = self.polygon[(i + 1) % n];
            let cross = (b.x - a.x) * (y - a.y) - (b.y - a.y) * (x - a.x);
            cross * orientation >= -EDGE_EPSILON * (1.0 + (b.x - a.x).abs() + (b.y - a.y).abs())
        })
    }

    #[must_use]
    pub fn to_path(&self) -> PathData {
        PathData::polygon(&self.polygon)
    }

    fn orientation(&self) -> f64 {
        let n = self.polygon.len();
        let twice = (0..n)
            .map(|i| {
                let a = self.polygon[i];
                let b = self.polygon[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>();
        if twice < 0.0 { -1.0 } else { 1.0 }
    }
}

/// Splits a clip box into one nearest-point region per input point.
///
/// Implementations return exactly one cell per point, in input order, with
/// `owner_index` equal to the point's position.
pub trait PointPartitioner {
    fn partition(&self, points: &[PlotPoint], clip: ClipRect) -> Vec<VoronoiCell>;
}

/// Voronoi partition by successive bisector clipping.
///
/// Each cell starts as the clip box and is cut by the bisector half-plane of
/// other points in order of increasing distance. Once a candidate lies
/// farther than twice the cell's farthest vertex it cannot cut the cell, so
/// the remaining candidates are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfPlanePartitioner;

impl PointPartitioner for HalfPlanePartitioner {
    fn partition(&self, points: &[PlotPoint], clip: ClipRect) -> Vec<VoronoiCell> {
        if points.is_empty() {
            return Vec::new();
        }
        let first_owner = first_occurrences(points);

        #[cfg(feature = "parallel-partition")]
        {
            use rayon::prelude::*;
            return (0..points.len())
                .into_par_iter()
                .map(|index| cell_for(index, points, &first_owner, clip))
                .collect();
        }

        #[cfg(not(feature = "parallel-partition"))]
        {
            (0..points.len())
                .map(|index| cell_for(index, points, &first_owner, clip))
                .collect()
        }
    }
}

/// Index of the first cell containing `(x, y)`, skipping degenerate cells.
#[must_use]
pub fn locate_cell(cells: &[VoronoiCell], x: f64, y: f64) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    cells
        .iter()
        .find(|cell| cell.contains(x, y))
        .map(|cell| cell.owner_index)
}

/// Index of the nearest point, ties resolved to the lower index.
#[must_use]
pub fn nearest_point(points: &[PlotPoint], x: f64, y: f64) -> Option<usize> {
    let target = PlotPoint::new(x, y);
    points
        .iter()
        .enumerate()
        .min_by_key(|(index, point)| (OrderedFloat(point.distance_squared(target)), *index))
        .map(|(index, _)| index)
}

/// For each point, the lowest index holding the same coordinates.
fn first_occurrences(points: &[PlotPoint]) -> Vec<usize> {
    let mut seen: HashMap<(OrderedFloat<f64>, OrderedFloat<f64>), usize> = HashMap::new();
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
            let key = (OrderedFloat(point.x + 0.0), OrderedFloat(point.y + 0.0));
            *seen.entry(key).or_insert(index)
        })
        .collect()
}

fn cell_for(
    index: usize,
    points: &[PlotPoint],
    first_owner: &[usize],
    clip: ClipRect,
) -> VoronoiCell {
    if first_owner[index] != index {
        return VoronoiCell {
            owner_index: index,
            polygon: Vec::new(),
        };
    }

    let site = points[index];
    let mut candidates: Vec<(OrderedFloat<f64>, usize)> = points
        .iter()
        .enumerate()
        .filter(|&(other, _)| first_owner[other] == other && other != index)
        .map(|(other, point)| (OrderedFloat(site.distance_squared(*point)), other))
        .collect();
    candidates.sort_unstable();

    let mut ring = clip.ring();
    let mut reach_squared = farthest_vertex_squared(&ring, site);
    for (distance_squared, other) in candidates {
        // |q - other| >= |other - site| - |q - site| > R once |other - site| > 2R.
        if distance_squared.0 > 4.0 * reach_squared {
            break;
        }
        ring = clip_to_bisector(&ring, site, points[other]);
        if ring.len() < 3 {
            break;
        }
        reach_squared = farthest_vertex_squared(&ring, site);
    }

    VoronoiCell {
        owner_index: index,
        polygon: if ring.len() < 3 { Vec::new() } else { ring.to_vec() },
    }
}

fn farthest_vertex_squared(ring: &Ring, site: PlotPoint) -> f64 {
    ring.iter()
        .map(|vertex| vertex.distance_squared(site))
        .fold(0.0, f64::max)
}

/// Keeps the part of `ring` on `site`'s side of the bisector with `other`.
fn clip_to_bisector(ring: &Ring, site: PlotPoint, other: PlotPoint) -> Ring {
    let nx = other.x - site.x;
    let ny = other.y - site.y;
    let mx = (site.x + other.x) / 2.0;
    let my = (site.y + other.y) / 2.0;
    let side = |p: PlotPoint| (p.x - mx) * nx + (p.y - my) * ny;

    let mut out = Ring::new();
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let fa = side(a);
        let fb = side(b);
        if fa <= 0.0 {
            push_vertex(&mut out, a);
        }
        if (fa < 0.0 && fb > 0.0) || (fa > 0.0 && fb < 0.0) {
            let t = fa / (fa - fb);
            push_vertex(
                &mut out,
                PlotPoint::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t),
            );
        }
    }
    if out.len() > 1 && same_vertex(out[0], out[out.len() - 1]) {
        out.pop();
    }
    out
}

fn push_vertex(out: &mut Ring, vertex: PlotPoint) {
    if out.last().is_some_and(|last| same_vertex(*last, vertex)) {
        return;
    }
    out.push(vertex);
}

fn same_vertex(a: PlotPoint, b: PlotPoint) -> bool {
    (a.x - b.x).abs() <= EDGE_EPSILON && (a.y - b.y).abs() <= EDGE_EPSILON
}
