// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convex hulls of arbitrary vertex sets.
//!
//! The hull is stored as a list of half-spaces `normal · p >= offset` with
//! integer coefficients, so membership is exact. Vertex sets that do not span
//! a solid still produce a hull: a flat polygon, a segment or a single cell.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::{BlockPos, Region, RegionError, RegionResult};

type Vector = [i128; 3];

/// The points `p` with `normal · p >= offset`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
struct HalfSpace {
    normal: Vector,
    offset: i128,
}

impl HalfSpace {
    /// The half-space bounded by the plane through `point`, reduced so the
    /// normal's components are coprime.
    fn through(normal: Vector, point: Vector) -> Self {
        let g = gcd(gcd(normal[0], normal[1]), normal[2]).max(1);
        let normal = [normal[0] / g, normal[1] / g, normal[2] / g];
        Self {
            normal,
            offset: dot(normal, point),
        }
    }

    fn holds(&self, p: Vector) -> bool {
        dot(self.normal, p) >= self.offset
    }
}

fn vector(pos: BlockPos) -> Vector {
    [i128::from(pos.x), i128::from(pos.y), i128::from(pos.z)]
}

fn sub(a: Vector, b: Vector) -> Vector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn neg(a: Vector) -> Vector {
    [-a[0], -a[1], -a[2]]
}

fn cross(a: Vector, b: Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: Vector, b: Vector) -> i128 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

fn ceil_div(a: i128, b: i128) -> i128 {
    -floor_div(-a, b)
}

/// Which side of the plane through `origin` with `normal` the points fall on.
///
/// Returns `(any above, any below)`.
fn sides(points: &[Vector], origin: Vector, normal: Vector) -> (bool, bool) {
    let mut above = false;
    let mut below = false;
    for &p in points {
        match dot(normal, sub(p, origin)).signum() {
            1 => above = true,
            -1 => below = true,
            _ => {}
        }
    }
    (above, below)
}

/// Pushes the supporting half-space of the plane, if all points lie on one side.
fn push_supporting(faces: &mut Vec<HalfSpace>, points: &[Vector], origin: Vector, normal: Vector) {
    match sides(points, origin, normal) {
        (_, false) => faces.push(HalfSpace::through(normal, origin)),
        (false, true) => faces.push(HalfSpace::through(neg(normal), origin)),
        (true, true) => {}
    }
}

/// The convex hull of a set of block positions.
///
/// Vertices form an unordered set; adding a vertex that is already present
/// is not a change. Cells are inside when their centres lie in the hull,
/// boundary included.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConvexPolyhedralRegion {
    vertices: HashSet<BlockPos>,
    min: BlockPos,
    max: BlockPos,
    faces: Vec<HalfSpace>,
    flat: bool,
}

impl ConvexPolyhedralRegion {
    /// Creates the hull of `vertices`. Duplicates are ignored.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = BlockPos>,
    {
        let mut region = Self {
            vertices: vertices.into_iter().collect(),
            ..Self::default()
        };
        region.rebuild();
        region
    }

    /// A hull holding the single vertex `pos`.
    #[must_use]
    pub fn from_point(pos: BlockPos) -> Self {
        Self::new([pos])
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether `pos` is one of the vertices.
    #[must_use]
    pub fn has_vertex(&self, pos: BlockPos) -> bool {
        self.vertices.contains(&pos)
    }

    /// The vertices, sorted.
    #[must_use]
    pub fn vertices(&self) -> Vec<BlockPos> {
        let mut vertices: Vec<BlockPos> = self.vertices.iter().copied().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, pos: BlockPos) -> bool {
        if !self.vertices.insert(pos) {
            return false;
        }
        self.rebuild();
        true
    }

    /// Whether the vertices span at least a triangle, rather than a single
    /// cell or a segment.
    #[must_use]
    pub fn spans_plane(&self) -> bool {
        self.flat
    }

    fn rebuild(&mut self) {
        let sorted = self.vertices();
        self.faces.clear();
        self.flat = false;
        let Some((&first, rest)) = sorted.split_first() else {
            self.min = BlockPos::ZERO;
            self.max = BlockPos::ZERO;
            return;
        };
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        self.min = min;
        self.max = max;

        let (lo, hi) = (vector(min), vector(max));
        for axis in 0..3 {
            let mut normal = [0; 3];
            normal[axis] = 1;
            self.faces.push(HalfSpace::through(normal, lo));
            self.faces.push(HalfSpace::through(neg(normal), hi));
        }

        let points: Vec<Vector> = sorted.iter().map(|&p| vector(p)).collect();
        let a = points[0];
        let Some(b) = points.iter().copied().find(|&p| p != a) else {
            self.finish();
            return;
        };
        let line = sub(b, a);
        let Some(plane) = points
            .iter()
            .map(|&p| cross(line, sub(p, a)))
            .find(|&n| n != [0; 3])
        else {
            self.bound_line(a, line);
            self.finish();
            return;
        };
        self.flat = true;

        if points.iter().any(|&p| dot(plane, sub(p, a)) != 0) {
            self.bound_solid(&points);
        } else {
            self.bound_flat(&points, plane);
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.faces.sort_unstable();
        self.faces.dedup();
    }

    /// Collinear vertices: the line through them, clipped by the bounding box.
    fn bound_line(&mut self, origin: Vector, direction: Vector) {
        let axis = (0..3)
            .min_by_key(|&i| direction[i].abs())
            .unwrap_or(0);
        let mut unit = [0; 3];
        unit[axis] = 1;
        let u = cross(direction, unit);
        let v = cross(direction, u);
        for normal in [u, v] {
            self.faces.push(HalfSpace::through(normal, origin));
            self.faces.push(HalfSpace::through(neg(normal), origin));
        }
    }

    /// Coplanar vertices: the plane itself plus the outline's edges, found in
    /// the projection that drops the plane normal's largest axis.
    fn bound_flat(&mut self, points: &[Vector], plane: Vector) {
        let origin = points[0];
        self.faces.push(HalfSpace::through(plane, origin));
        self.faces.push(HalfSpace::through(neg(plane), origin));

        let dropped = (0..3).max_by_key(|&i| plane[i].abs()).unwrap_or(1);
        let (u, v) = match dropped {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        for (i, &p) in points.iter().enumerate() {
            for &q in &points[i + 1..] {
                let edge = sub(q, p);
                let mut normal = [0; 3];
                normal[u] = -edge[v];
                normal[v] = edge[u];
                if normal != [0; 3] {
                    push_supporting(&mut self.faces, points, p, normal);
                }
            }
        }
    }

    /// Vertices spanning a solid: every supporting plane through three of them.
    fn bound_solid(&mut self, points: &[Vector]) {
        for (i, &p) in points.iter().enumerate() {
            for (j, &q) in points.iter().enumerate().skip(i + 1) {
                for &r in &points[j + 1..] {
                    let normal = cross(sub(q, p), sub(r, p));
                    if normal != [0; 3] {
                        push_supporting(&mut self.faces, points, p, normal);
                    }
                }
            }
        }
    }
}

impl Region for ConvexPolyhedralRegion {
    fn type_name(&self) -> &'static str {
        "convex"
    }

    fn min(&self) -> BlockPos {
        self.min
    }

    fn max(&self) -> BlockPos {
        self.max
    }

    fn volume(&self) -> u64 {
        if self.vertices.is_empty() {
            return 0;
        }
        let mut cells = 0_u64;
        for x in self.min.x..=self.max.x {
            for y in self.min.y..=self.max.y {
                let (mut lo, mut hi) = (i128::from(self.min.z), i128::from(self.max.z));
                for face in &self.faces {
                    let [nx, ny, nz] = face.normal;
                    let rest = face.offset - nx * i128::from(x) - ny * i128::from(y);
                    match nz.signum() {
                        1 => lo = lo.max(ceil_div(rest, nz)),
                        -1 => hi = hi.min(floor_div(rest, nz)),
                        _ if rest > 0 => hi = lo - 1,
                        _ => {}
                    }
                }
                if lo <= hi {
                    let row = u64::try_from(hi - lo + 1).unwrap_or(u64::MAX);
                    cells = cells.saturating_add(row);
                }
            }
        }
        cells
    }

    fn contains(&self, pos: BlockPos) -> bool {
        let p = vector(pos);
        !self.vertices.is_empty() && self.faces.iter().all(|face| face.holds(p))
    }

    fn expand(&mut self, _changes: &[BlockPos]) -> RegionResult<()> {
        Err(unsupported())
    }

    fn contract(&mut self, _changes: &[BlockPos]) -> RegionResult<()> {
        Err(unsupported())
    }

    fn shift(&mut self, offset: BlockPos) -> RegionResult<()> {
        self.vertices = self.vertices.iter().map(|&v| v + offset).collect();
        self.rebuild();
        Ok(())
    }
}

fn unsupported() -> RegionError {
    RegionError::UnsupportedChange {
        region: "convex",
        reason: "convex hulls can only be changed by adding vertices",
    }
}
