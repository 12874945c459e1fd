// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element adjacency from shared face edges.
//!
//! Decoded geometry carries no shared vertex identities: every face has
//! its own occurrences of each corner. To recover adjacency, corners are
//! merged within a tolerance using a grid-based spatial hash, and two
//! elements become adjacent when any of their face loops share a merged
//! edge (two consecutive merged corners).

use ifc_spatial_sdo::{PlanarFace, Polyhedron};
use nalgebra::Point3;
use rustc_hash::{FxHashMap, FxHashSet};

/// A spatial hash grid that merges corner positions within tolerance.
///
/// The grid divides space into cubic cells of side `cell_size`; lookups
/// probe the 3x3x3 neighborhood, so the tolerance must not exceed the
/// cell size.
#[derive(Debug)]
struct CornerGrid {
    cell_size: f64,
    tolerance: f64,
    positions: Vec<Point3<f64>>,
    grid: FxHashMap<(i64, i64, i64), Vec<u32>>,
}

impl CornerGrid {
    fn new(tolerance: f64) -> Self {
        let cell_size = tolerance.max(1e-10);
        Self {
            cell_size,
            tolerance,
            positions: Vec::new(),
            grid: FxHashMap::default(),
        }
    }

    fn cell_coords(&self, p: Point3<f64>) -> (i64, i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
            (p.z / self.cell_size).floor() as i64,
        )
    }

    /// Returns the merged corner id for a position, inserting a new one
    /// when nothing lies within tolerance.
    fn merge(&mut self, p: Point3<f64>) -> u32 {
        let (cx, cy, cz) = self.cell_coords(p);
        let tol_sq = self.tolerance * self.tolerance;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(ids) = self.grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &id in ids {
                        let q = self.positions[id as usize];
                        if (q - p).norm_squared() <= tol_sq {
                            return id;
                        }
                    }
                }
            }
        }

        let id = self.positions.len() as u32;
        self.positions.push(p);
        self.grid.entry((cx, cy, cz)).or_default().push(id);
        id
    }
}

/// Incrementally builds an [`AdjacencyGraph`] from decoded geometry.
#[derive(Debug)]
pub struct AdjacencyBuilder {
    corners: CornerGrid,
    /// Merged edge (low corner id, high corner id) → owning elements.
    edge_owners: FxHashMap<(u32, u32), FxHashSet<u64>>,
    elements: Vec<u64>,
    seen: FxHashSet<u64>,
}

impl AdjacencyBuilder {
    /// Starts a builder whose corner merge distance is `tolerance`.
    pub fn new(tolerance: f64) -> Self {
        Self {
            corners: CornerGrid::new(tolerance),
            edge_owners: FxHashMap::default(),
            elements: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Registers an element's solid geometry.
    pub fn add_solid(&mut self, element: u64, polyhedron: &Polyhedron) {
        self.register(element);
        let face_count = polyhedron.face_count();
        for f in 0..face_count {
            if let Some(points) = polyhedron.face_points(f) {
                self.add_loop(element, &points);
            }
        }
    }

    /// Registers an element's planar face geometry (outer loop only -
    /// hole rims do not join elements).
    pub fn add_face(&mut self, element: u64, face: &PlanarFace) {
        self.register(element);
        self.add_loop(element, face.outer());
    }

    /// Registers an element with no edge-bearing geometry, so it still
    /// appears in the graph as an isolated node.
    pub fn register(&mut self, element: u64) {
        if self.seen.insert(element) {
            self.elements.push(element);
        }
    }

    fn add_loop(&mut self, element: u64, points: &[Point3<f64>]) {
        if points.len() < 2 {
            return;
        }
        let ids: Vec<u32> = points.iter().map(|&p| self.corners.merge(p)).collect();
        let n = ids.len();
        for i in 0..n {
            let a = ids[i];
            let b = ids[(i + 1) % n];
            if a == b {
                continue; // merged into the same corner, no edge
            }
            let edge = (a.min(b), a.max(b));
            self.edge_owners.entry(edge).or_default().insert(element);
        }
    }

    /// Resolves shared edges into the final graph.
    pub fn finish(self) -> AdjacencyGraph {
        let mut neighbors: FxHashMap<u64, FxHashSet<u64>> = FxHashMap::default();
        for element in &self.elements {
            neighbors.entry(*element).or_default();
        }
        for owners in self.edge_owners.values() {
            for &a in owners {
                for &b in owners {
                    if a != b {
                        neighbors.entry(a).or_default().insert(b);
                    }
                }
            }
        }
        AdjacencyGraph {
            elements: self.elements,
            neighbors,
        }
    }
}

/// Which elements touch which, by shared face edges.
#[derive(Debug)]
pub struct AdjacencyGraph {
    elements: Vec<u64>,
    neighbors: FxHashMap<u64, FxHashSet<u64>>,
}

impl AdjacencyGraph {
    /// Number of registered elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The neighbors of an element, sorted for deterministic output.
    pub fn neighbors(&self, element: u64) -> Vec<u64> {
        let mut out: Vec<u64> = self
            .neighbors
            .get(&element)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    /// Every adjacent pair, each reported once with the lower id first,
    /// sorted for deterministic output.
    pub fn adjacent_pairs(&self) -> Vec<(u64, u64)> {
        let mut pairs = Vec::new();
        for (&a, adjacent) in &self.neighbors {
            for &b in adjacent {
                if a < b {
                    pairs.push((a, b));
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }

    /// `true` when the two elements share at least one merged edge.
    pub fn are_adjacent(&self, a: u64, b: u64) -> bool {
        self.neighbors
            .get(&a)
            .is_some_and(|set| set.contains(&b))
    }

    /// Number of connected components among registered elements.
    pub fn component_count(&self) -> usize {
        let mut visited: FxHashSet<u64> = FxHashSet::default();
        let mut components = 0;

        for &start in &self.elements {
            if !visited.insert(start) {
                continue;
            }
            components += 1;
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                if let Some(adjacent) = self.neighbors.get(&current) {
                    for &next in adjacent {
                        if visited.insert(next) {
                            stack.push(next);
                        }
                    }
                }
            }
        }
        components
    }
}
