// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Metric queries on decoded polyhedra and polygon loops.
//!
//! Computes normals, centroids, volumes, and fan triangulations using
//! standard computational geometry algorithms (no external kernel).

use ifc_spatial_sdo::{FaceMode, Polyhedron};
use nalgebra::{Point3, Vector3};

/// Computes a polygon's normal using Newell's method.
///
/// Works for any planar polygon (convex or concave). The direction follows
/// the right-hand rule relative to the vertex winding order. Returns `None`
/// for degenerate polygons.
pub fn polygon_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    if points.len() < 3 {
        return None;
    }

    let mut normal: Vector3<f64> = Vector3::zeros();
    let n = points.len();
    for i in 0..n {
        let curr = points[i];
        let next = points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }

    let len = normal.norm();
    if len < 1e-15 {
        return None; // degenerate polygon
    }
    Some(normal / len)
}

/// Arithmetic mean of a polygon's vertices.
pub fn polygon_centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let mut sum = Vector3::zeros();
    for p in points {
        sum += p.coords;
    }
    Some(Point3::from(sum / points.len() as f64))
}

/// Fan-triangulates every face of a polyhedron into vertex-index triples.
///
/// Arbitrary-count faces triangulate as a fan from their first vertex;
/// faces with fewer than 3 vertices contribute nothing. A polyhedron
/// already in triangle mode passes through unchanged.
pub fn triangulate(polyhedron: &Polyhedron) -> Vec<[u32; 3]> {
    let mut triangles = Vec::new();
    for face in polyhedron.faces() {
        if face.len() < 3 {
            continue;
        }
        match polyhedron.face_mode {
            FaceMode::Triangles => triangles.push([face[0], face[1], face[2]]),
            FaceMode::Arbitrary => {
                for i in 1..face.len() - 1 {
                    triangles.push([face[0], face[i], face[i + 1]]);
                }
            }
        }
    }
    triangles
}

/// Computes the volume of a closed polyhedron by the signed tetrahedron
/// method: each triangle forms a tetrahedron with the origin, and the
/// signed volumes cancel to the enclosed volume.
pub fn volume(polyhedron: &Polyhedron) -> f64 {
    let mut total = 0.0;
    for [i0, i1, i2] in triangulate(polyhedron) {
        let (Some(p0), Some(p1), Some(p2)) = (
            polyhedron.vertices.get(i0 as usize),
            polyhedron.vertices.get(i1 as usize),
            polyhedron.vertices.get(i2 as usize),
        ) else {
            continue;
        };
        total += p0.coords.dot(&p1.coords.cross(&p2.coords));
    }
    (total / 6.0).abs()
}

/// Arithmetic mean of the polyhedron's vertex occurrences.
pub fn vertex_centroid(polyhedron: &Polyhedron) -> Option<Point3<f64>> {
    polygon_centroid(&polyhedron.vertices)
}

/// The Newell normal of face `f`.
pub fn face_normal(polyhedron: &Polyhedron, f: usize) -> Option<Vector3<f64>> {
    polygon_normal(&polyhedron.face_points(f)?)
}
