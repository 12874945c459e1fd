// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Spatial Analysis
//!
//! Geometric post-processing over decoded building geometry: axis-aligned
//! bounding volumes, element axis derivation, polyhedron metrics, and an
//! element adjacency graph built by tolerance-based corner merging.
//!
//! All computations use standard computational-geometry algorithms
//! (Newell normals, fan triangulation, signed tetrahedra) - no external
//! kernel. Queries that can fail geometrically (degenerate faces, empty
//! inputs) return `Option` rather than an error.

pub mod adjacency;
pub mod axis;
pub mod bounds;
pub mod metrics;

pub use adjacency::{AdjacencyBuilder, AdjacencyGraph};
pub use axis::{element_axis, Axis};
pub use bounds::Aabb;
pub use metrics::{face_normal, polygon_centroid, polygon_normal, triangulate, vertex_centroid, volume};
