// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded geometry value types.
//!
//! Decoders construct these fresh per call; they hold no reference back to
//! the input record and have no mutation contract once returned.

use nalgebra::Point3;

/// A straight segment between two decoded points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl LineSegment {
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// A planar face bounded by one outer loop and zero or more hole loops.
///
/// Loops are implicitly closed: the last point connects back to the first,
/// and no redundant closing vertex is ever stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarFace {
    /// Loop 0 is the outer boundary; subsequent loops are holes, in
    /// encoded order.
    pub loops: Vec<Vec<Point3<f64>>>,
}

impl PlanarFace {
    /// The outer boundary loop.
    pub fn outer(&self) -> &[Point3<f64>] {
        self.loops.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The hole loops, in encoded order.
    pub fn holes(&self) -> &[Vec<Point3<f64>>] {
        self.loops.get(1..).unwrap_or(&[])
    }

    /// Total number of loops, outer boundary included.
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }
}

/// How a polyhedron's index list is organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceMode {
    /// Faces carry arbitrary vertex counts, recorded per face. This is the
    /// only mode the decoder emits.
    Arbitrary,
    /// Every face is a triangle; produced by downstream triangulation.
    Triangles,
}

/// A solid decoded as a flat pool of vertex occurrences plus per-face
/// vertex counts.
///
/// Vertices are deduplicated per *occurrence* only - the closing duplicate
/// that terminates each encoded face loop is dropped, but vertices shared
/// between faces are not globally merged. Face `f` uses
/// `vertex_indices[offset..offset + face_vertex_counts[f]]` where `offset`
/// accumulates the counts of the preceding faces.
///
/// Multi-lump solids flatten into one face list; lump boundaries are not
/// retained.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyhedron {
    /// Vertex occurrence pool, in decode order.
    pub vertices: Vec<Point3<f64>>,
    /// Number of vertices bounding each face.
    pub face_vertex_counts: Vec<usize>,
    /// Indices into `vertices`, concatenated face by face.
    pub vertex_indices: Vec<u32>,
    /// Index list organization.
    pub face_mode: FaceMode,
}

impl Polyhedron {
    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.face_vertex_counts.len()
    }

    /// The index slice for face `f`, or `None` when `f` is out of range.
    pub fn face(&self, f: usize) -> Option<&[u32]> {
        let count = *self.face_vertex_counts.get(f)?;
        let offset: usize = self.face_vertex_counts[..f].iter().sum();
        self.vertex_indices.get(offset..offset + count)
    }

    /// Iterates over the index slice of every face, in order.
    pub fn faces(&self) -> impl Iterator<Item = &[u32]> {
        self.face_vertex_counts.iter().scan(0usize, move |offset, &count| {
            let start = *offset;
            *offset += count;
            self.vertex_indices.get(start..start + count)
        })
    }

    /// Resolves face `f` to its vertex positions.
    pub fn face_points(&self, f: usize) -> Option<Vec<Point3<f64>>> {
        let indices = self.face(f)?;
        indices
            .iter()
            .map(|&i| self.vertices.get(i as usize).copied())
            .collect()
    }
}

/// Classification of a decoded geometry; the multi variants of the wire
/// encoding collapse into their singular class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryClass {
    Point,
    Line,
    Polygon,
    Solid,
}

impl GeometryClass {
    /// Returns the class name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryClass::Point => "Point",
            GeometryClass::Line => "Line",
            GeometryClass::Polygon => "Polygon",
            GeometryClass::Solid => "Solid",
        }
    }
}

impl std::fmt::Display for GeometryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded geometry, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// One or more independent points.
    Points(Vec<Point3<f64>>),
    /// Independent line segments.
    Segments(Vec<LineSegment>),
    /// A single planar face with optional holes.
    Face(PlanarFace),
    /// A solid as an arbitrary-face polyhedron.
    Solid(Polyhedron),
}

impl Geometry {
    /// The shape classification of this value.
    pub fn class(&self) -> GeometryClass {
        match self {
            Geometry::Points(_) => GeometryClass::Point,
            Geometry::Segments(_) => GeometryClass::Line,
            Geometry::Face(_) => GeometryClass::Polygon,
            Geometry::Solid(_) => GeometryClass::Solid,
        }
    }
}
