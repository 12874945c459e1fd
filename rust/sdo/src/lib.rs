// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Spatial SDO Codec
//!
//! Decodes the spatial store's compact geometry encoding - an element-info
//! integer array plus a flat ordinate array - into structured 3D geometry:
//! points, line segments, planar faces with holes, and arbitrary-face
//! polyhedra.
//!
//! ## Overview
//!
//! A [`GeometryRecord`] is the in-memory image of one row's geometry
//! columns. Its packed `gtype` selects one of four decoder families:
//!
//! - SOLID / MULTISOLID → [`Polyhedron`]
//! - POLYGON / MULTIPOLYGON → [`PlanarFace`]
//! - LINE / MULTILINE → a batch of [`LineSegment`]s
//! - POINT / MULTIPOINT → a batch of points
//!
//! [`decode_geometry`] routes a record to the matching decoder and returns
//! the result tagged with its resolved [`GeometryClass`] (the multi
//! variants collapse into their singular class).
//!
//! ## Quick Start
//!
//! ```rust
//! use ifc_spatial_sdo::{decode_geometry, Geometry, GeometryClass, GeometryRecord};
//!
//! // A one-face solid: a triangle loop, redundantly closed by the store.
//! let record = GeometryRecord::new(
//!     3008,
//!     vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
//!     vec![
//!         0.0, 0.0, 0.0, //
//!         4.0, 0.0, 0.0, //
//!         0.0, 3.0, 0.0, //
//!         0.0, 0.0, 0.0, // closing duplicate, dropped by the decoder
//!     ],
//! );
//!
//! let (class, geometry) = decode_geometry(&record).unwrap();
//! assert_eq!(class, GeometryClass::Solid);
//! match geometry {
//!     Geometry::Solid(polyhedron) => {
//!         assert_eq!(polyhedron.face_count(), 1);
//!         assert_eq!(polyhedron.vertices.len(), 3);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Error Model
//!
//! Malformed input (empty ordinates, offsets out of range, a face loop
//! that never closes) is reported through [`Error`] variants for which
//! [`Error::is_recoverable`] returns `true`; batch callers skip those
//! elements and continue. The single fatal condition is an unrecognized
//! shape code reaching the dispatcher - a contract violation by the
//! upstream data, never retried.
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization support for records and decoded geometry

pub mod decode;
pub mod error;
pub mod geometry;
pub mod ordinates;
pub mod record;

pub use decode::{decode_face, decode_geometry, decode_points, decode_segments, decode_solid};
pub use error::{Error, Result};
pub use geometry::{FaceMode, Geometry, GeometryClass, LineSegment, PlanarFace, Polyhedron};
pub use ordinates::{LoopOffsets, Lump, LumpWalker, Ordinates};
pub use record::{GeometryRecord, ShapeTag};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
