// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element axis derivation.
//!
//! Downstream consumers want one representative axis per element: the run
//! direction of a wall, the normal of a slab face, the chord of a routing
//! segment. Point sets carry no direction and yield no axis.

use ifc_spatial_sdo::Geometry;
use nalgebra::{Point3, Vector3};

use crate::bounds::Aabb;
use crate::metrics::{polygon_centroid, polygon_normal};

/// An anchored direction: origin plus unit direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Axis {
    /// Builds an axis, normalizing the direction. `None` when the
    /// direction is too short to normalize.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Option<Self> {
        let len = direction.norm();
        if len < 1e-15 {
            return None;
        }
        Some(Self {
            origin,
            direction: direction / len,
        })
    }
}

/// Derives the representative axis of a decoded geometry.
///
/// - Segments: the chord from the first segment's start to the last
///   segment's end (falls back to the first segment's own direction when
///   the chord degenerates to a point, as in a closed loop).
/// - Faces: the Newell normal of the outer boundary, anchored at the
///   boundary's vertex centroid.
/// - Solids: the dominant extent direction of the bounding box, anchored
///   at the box centroid.
/// - Points: no axis.
pub fn element_axis(geometry: &Geometry) -> Option<Axis> {
    match geometry {
        Geometry::Points(_) => None,
        Geometry::Segments(segments) => {
            let first = segments.first()?;
            let last = segments.last()?;
            Axis::new(first.start, last.end - first.start)
                .or_else(|| Axis::new(first.start, first.end - first.start))
        }
        Geometry::Face(face) => {
            let outer = face.outer();
            let normal = polygon_normal(outer)?;
            let origin = polygon_centroid(outer)?;
            Axis::new(origin, normal)
        }
        Geometry::Solid(_) => {
            let bounds = Aabb::of_geometry(geometry);
            let (direction, _) = bounds.dominant_extent()?;
            Axis::new(bounds.centroid(), direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ifc_spatial_sdo::{LineSegment, PlanarFace, Point3};

    #[test]
    fn points_have_no_axis() {
        let geometry = Geometry::Points(vec![Point3::new(1.0, 1.0, 1.0)]);
        assert!(element_axis(&geometry).is_none());
    }

    #[test]
    fn segment_chord_axis() {
        let geometry = Geometry::Segments(vec![
            LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)),
            LineSegment::new(Point3::new(2.0, 0.0, 0.0), Point3::new(6.0, 0.0, 0.0)),
        ]);
        let axis = element_axis(&geometry).unwrap();
        assert_eq!(axis.origin, Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(axis.direction.x, 1.0);
        assert_relative_eq!(axis.direction.y, 0.0);
    }

    #[test]
    fn closed_loop_falls_back_to_first_segment() {
        // Chord start -> end is zero; the first leg's direction stands in
        let geometry = Geometry::Segments(vec![
            LineSegment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
            LineSegment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0)),
        ]);
        let axis = element_axis(&geometry).unwrap();
        assert_relative_eq!(axis.direction.x, 1.0);
    }

    #[test]
    fn face_axis_is_outer_normal_at_centroid() {
        let geometry = Geometry::Face(PlanarFace {
            loops: vec![vec![
                Point3::new(0.0, 0.0, 2.0),
                Point3::new(4.0, 0.0, 2.0),
                Point3::new(4.0, 4.0, 2.0),
                Point3::new(0.0, 4.0, 2.0),
            ]],
        });
        let axis = element_axis(&geometry).unwrap();
        assert_relative_eq!(axis.direction.z.abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(axis.origin.x, 2.0);
        assert_relative_eq!(axis.origin.y, 2.0);
        assert_relative_eq!(axis.origin.z, 2.0);
    }

    #[test]
    fn solid_axis_runs_along_longest_extent() {
        use ifc_spatial_sdo::{decode_geometry, GeometryRecord};

        // A wall-like slab, 8 long, 1 thick, 3 high: single quad face is
        // enough to give the solid its extents
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
            vec![
                0.0, 0.0, 0.0, //
                8.0, 0.0, 0.0, //
                8.0, 1.0, 3.0, //
                0.0, 1.0, 3.0, //
                0.0, 0.0, 0.0,
            ],
        );
        let (_, geometry) = decode_geometry(&record).unwrap();
        let axis = element_axis(&geometry).unwrap();
        assert_relative_eq!(axis.direction.x, 1.0);
        assert_relative_eq!(axis.origin.x, 4.0);
    }

    #[test]
    fn degenerate_face_has_no_axis() {
        let geometry = Geometry::Face(PlanarFace {
            loops: vec![vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
            ]],
        });
        assert!(element_axis(&geometry).is_none());
    }
}
