// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding volumes in f64 precision.

use ifc_spatial_sdo::Geometry;
use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box, accumulated point by point.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
    /// Number of points accumulated.
    sample_count: usize,
}

impl Aabb {
    /// Creates empty bounds; invalid until at least one point is added.
    pub fn new() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
            sample_count: 0,
        }
    }

    /// Accumulates the bounds of every coordinate a geometry carries.
    pub fn of_geometry(geometry: &Geometry) -> Self {
        let mut bounds = Self::new();
        match geometry {
            Geometry::Points(points) => {
                for p in points {
                    bounds.expand(*p);
                }
            }
            Geometry::Segments(segments) => {
                for s in segments {
                    bounds.expand(s.start);
                    bounds.expand(s.end);
                }
            }
            Geometry::Face(face) => {
                for ring in &face.loops {
                    for p in ring {
                        bounds.expand(*p);
                    }
                }
            }
            Geometry::Solid(polyhedron) => {
                for p in &polyhedron.vertices {
                    bounds.expand(*p);
                }
            }
        }
        bounds
    }

    /// `true` once at least one point has been accumulated.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    /// Expands the bounds to include a point.
    #[inline]
    pub fn expand(&mut self, p: Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
        self.sample_count += 1;
    }

    /// Merges another box into this one.
    pub fn union(&mut self, other: &Aabb) {
        if !other.is_valid() {
            return;
        }
        self.expand(other.min);
        self.expand(other.max);
        // expand() counted the two corners; keep the true sample total
        self.sample_count = self.sample_count - 2 + other.sample_count;
    }

    /// Center of the box, or the origin for empty bounds.
    pub fn centroid(&self) -> Point3<f64> {
        if !self.is_valid() {
            return Point3::origin();
        }
        nalgebra::center(&self.min, &self.max)
    }

    /// Side lengths along x, y, z. Zero vector for empty bounds.
    pub fn extents(&self) -> Vector3<f64> {
        if !self.is_valid() {
            return Vector3::zeros();
        }
        self.max - self.min
    }

    /// The unit axis (x, y or z) along the longest side, with that side's
    /// length. `None` for empty or zero-size bounds.
    pub fn dominant_extent(&self) -> Option<(Vector3<f64>, f64)> {
        let e = self.extents();
        let longest = e.x.max(e.y).max(e.z);
        if longest <= 0.0 {
            return None;
        }
        let axis = if e.x >= e.y && e.x >= e.z {
            Vector3::x()
        } else if e.y >= e.z {
            Vector3::y()
        } else {
            Vector3::z()
        };
        Some((axis, longest))
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new()
    }
}
