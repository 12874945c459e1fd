// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row model for the relational tables the extraction fills.
//!
//! Plain serializable values with no database coupling; the bulk-insert
//! layer consuming them is out of scope.

use ifc_spatial_analysis::{element_axis, volume, Aabb};
use ifc_spatial_sdo::Geometry;
use serde::{Deserialize, Serialize};

/// One building element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRow {
    pub element_id: u64,
    pub guid: String,
    pub name: Option<String>,
    /// Schema class name, e.g. `IfcWall`.
    pub class: String,
    /// The storey containing this element, when resolved.
    pub storey_id: Option<u64>,
}

/// The decoded-geometry summary stored alongside an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryRow {
    pub element_id: u64,
    /// Resolved shape classification (`Point`, `Line`, `Polygon`, `Solid`).
    pub geometry_class: String,
    pub point_count: usize,
    pub segment_count: usize,
    pub face_count: usize,
    pub vertex_count: usize,
    /// Bounding box corners, absent for empty geometry.
    pub bbox_min: Option<[f64; 3]>,
    pub bbox_max: Option<[f64; 3]>,
    /// Representative axis, absent where none is derivable.
    pub axis_origin: Option<[f64; 3]>,
    pub axis_direction: Option<[f64; 3]>,
    /// Enclosed volume, solids only.
    pub volume: Option<f64>,
}

impl GeometryRow {
    /// Summarizes a decoded geometry into its row.
    pub fn derive(element_id: u64, geometry: &Geometry) -> Self {
        let (point_count, segment_count, face_count, vertex_count) = match geometry {
            Geometry::Points(points) => (points.len(), 0, 0, points.len()),
            Geometry::Segments(segments) => (0, segments.len(), 0, segments.len() * 2),
            Geometry::Face(face) => {
                let vertices = face.loops.iter().map(Vec::len).sum();
                (0, 0, 1, vertices)
            }
            Geometry::Solid(polyhedron) => {
                (0, 0, polyhedron.face_count(), polyhedron.vertices.len())
            }
        };

        let bounds = Aabb::of_geometry(geometry);
        let (bbox_min, bbox_max) = if bounds.is_valid() {
            (
                Some([bounds.min.x, bounds.min.y, bounds.min.z]),
                Some([bounds.max.x, bounds.max.y, bounds.max.z]),
            )
        } else {
            (None, None)
        };

        let axis = element_axis(geometry);
        let solid_volume = match geometry {
            Geometry::Solid(polyhedron) => Some(volume(polyhedron)),
            _ => None,
        };

        Self {
            element_id,
            geometry_class: geometry.class().to_string(),
            point_count,
            segment_count,
            face_count,
            vertex_count,
            bbox_min,
            bbox_max,
            axis_origin: axis.map(|a| [a.origin.x, a.origin.y, a.origin.z]),
            axis_direction: axis.map(|a| [a.direction.x, a.direction.y, a.direction.z]),
            volume: solid_volume,
        }
    }
}

/// A material association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRow {
    pub element_id: u64,
    pub material: String,
    /// Layer thickness when the association is a layer set.
    pub layer_thickness: Option<f64>,
}

/// Spatial containment: element → containing structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainmentRow {
    pub element_id: u64,
    pub parent_id: u64,
}

/// A shared element type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRow {
    pub type_id: u64,
    pub name: String,
    pub class: String,
}
