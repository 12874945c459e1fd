// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid decoder - rebuilds a polyhedron from the lump/face layout.

use nalgebra::Point3;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::geometry::{FaceMode, Polyhedron};
use crate::ordinates::{LumpWalker, Ordinates};
use crate::record::GeometryRecord;

/// Decodes a SOLID or MULTISOLID record into an arbitrary-face polyhedron.
///
/// Every face loop in the encoding is redundantly closed: the store writes
/// the loop's first vertex again, verbatim, to mark closure. That closing
/// duplicate terminates the face and is never stored; detection is exact
/// coordinate equality, no tolerance.
///
/// Faces of every lump land in one flat face list; lump boundaries are not
/// retained in the output.
///
/// An empty ordinate array means "no usable geometry" and returns a
/// recoverable failure without allocating anything.
pub fn decode_solid(record: &GeometryRecord) -> Result<Polyhedron> {
    if record.ordinates.is_empty() {
        return Err(Error::EmptyOrdinates);
    }

    let ords = Ordinates::new(&record.ordinates);
    let mut vertices: Vec<Point3<f64>> = Vec::new();
    let mut face_vertex_counts: Vec<usize> = Vec::new();

    for lump in LumpWalker::new(&record.element_info)? {
        let lump = lump?;

        // Validate the whole lump's face starts before reading any of them
        let starts: SmallVec<[usize; 8]> = (0..lump.face_count())
            .map(|f| ords.triple_index(lump.face_offset(f)))
            .collect::<Result<_>>()?;

        for start in starts {
            let count = read_face(&ords, start, face_vertex_counts.len(), &mut vertices)?;
            face_vertex_counts.push(count);
        }
    }

    let total: u32 = face_vertex_counts.iter().map(|&c| c as u32).sum();
    Ok(Polyhedron {
        vertex_indices: (0..total).collect(),
        vertices,
        face_vertex_counts,
        face_mode: FaceMode::Arbitrary,
    })
}

/// Reads one face loop starting at triple index `start`, appending every
/// vertex occurrence to `out` until the closing duplicate of the first
/// vertex arrives. Returns the number of vertices appended (the closing
/// duplicate excluded).
///
/// The cursor advances one triple per iteration, so the read always
/// terminates: either the duplicate is found, or the ordinates end and the
/// loop is reported malformed.
fn read_face(
    ords: &Ordinates<'_>,
    start: usize,
    face: usize,
    out: &mut Vec<Point3<f64>>,
) -> Result<usize> {
    let mut cursor = start;
    let mut reference: Option<Point3<f64>> = None;
    let mut count = 0usize;

    while let Some(triple) = ords.triple(cursor) {
        cursor += 1;
        match reference {
            None => {
                reference = Some(triple);
                out.push(triple);
                count += 1;
            }
            Some(first) if triple == first => return Ok(count),
            Some(_) => {
                out.push(triple);
                count += 1;
            }
        }
    }

    Err(Error::UnclosedFaceLoop { face })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ordinates for a unit tetrahedron: 4 triangular faces, each written
    /// as 4 triples with the 4th repeating the 1st.
    fn tetrahedron_ordinates() -> Vec<f64> {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let c = [0.0, 1.0, 0.0];
        let d = [0.0, 0.0, 1.0];
        let faces: [[[f64; 3]; 4]; 4] = [
            [a, c, b, a],
            [a, b, d, a],
            [a, d, c, a],
            [b, c, d, b],
        ];
        faces.iter().flatten().flatten().copied().collect()
    }

    /// Element info for the tetrahedron: one lump, 4 faces, 12 ordinates
    /// per face.
    fn tetrahedron_element_info() -> Vec<u32> {
        let mut info = vec![1, 1007, 1, 1, 1006, 4];
        for f in 0..4u32 {
            info.extend_from_slice(&[1 + f * 12, 1003, 1]);
        }
        info
    }

    #[test]
    fn closing_duplicate_is_dropped() {
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
            vec![
                2.0, 0.0, 0.0, //
                0.0, 3.0, 0.0, //
                0.0, 0.0, 4.0, //
                2.0, 0.0, 0.0, // exact repeat of the first vertex
            ],
        );
        let polyhedron = decode_solid(&record).unwrap();
        assert_eq!(polyhedron.face_count(), 1);
        assert_eq!(polyhedron.vertices.len(), 3);
        assert_eq!(polyhedron.face_vertex_counts, vec![3]);
    }

    #[test]
    fn tetrahedron_decodes_with_flat_vertex_pool() {
        let record =
            GeometryRecord::new(3008, tetrahedron_element_info(), tetrahedron_ordinates());
        let polyhedron = decode_solid(&record).unwrap();

        assert_eq!(polyhedron.face_count(), 4);
        assert_eq!(polyhedron.face_vertex_counts, vec![3, 3, 3, 3]);
        // Per-occurrence pool: 12 occurrences, not 4 merged vertices
        assert_eq!(polyhedron.vertices.len(), 12);
        assert_eq!(polyhedron.vertex_indices.len(), 12);
        assert_eq!(polyhedron.face_mode, FaceMode::Arbitrary);
    }

    #[test]
    fn vertex_accounting_invariant() {
        let record =
            GeometryRecord::new(3008, tetrahedron_element_info(), tetrahedron_ordinates());
        let polyhedron = decode_solid(&record).unwrap();

        let counted: usize = polyhedron.face_vertex_counts.iter().sum();
        assert_eq!(polyhedron.vertex_indices.len(), counted);
        assert_eq!(polyhedron.vertices.len(), counted);
    }

    #[test]
    fn multi_lump_faces_flatten_in_order() {
        // Two single-triangle lumps, 12 ordinates each
        let mut ordinates = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0,
        ];
        ordinates.extend_from_slice(&[
            5.0, 5.0, 5.0, //
            6.0, 5.0, 5.0, //
            5.0, 6.0, 5.0, //
            5.0, 5.0, 5.0,
        ]);
        let element_info = vec![
            1, 1007, 1, 1, 1006, 1, 1, 1003, 1, //
            13, 1007, 1, 13, 1006, 1, 13, 1003, 1,
        ];
        let record = GeometryRecord::new(3009, element_info, ordinates);
        let polyhedron = decode_solid(&record).unwrap();

        // Declared face counts sum across lumps
        assert_eq!(polyhedron.face_count(), 2);
        assert_eq!(polyhedron.vertices.len(), 6);
        // Second lump's reference vertex follows the first lump's faces
        assert_eq!(polyhedron.vertices[3], Point3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn quad_face_keeps_arbitrary_count() {
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
            vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0,
            ],
        );
        let polyhedron = decode_solid(&record).unwrap();
        assert_eq!(polyhedron.face_vertex_counts, vec![4]);
    }

    #[test]
    fn empty_ordinates_is_recoverable_and_allocates_nothing() {
        let record = GeometryRecord::new(3008, vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1], vec![]);
        let err = decode_solid(&record).unwrap_err();
        assert!(matches!(err, Error::EmptyOrdinates));
        assert!(err.is_recoverable());
    }

    #[test]
    fn unclosed_loop_is_malformed_not_hung() {
        // Three distinct vertices, no closing repeat anywhere
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
            vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0,
            ],
        );
        let err = decode_solid(&record).unwrap_err();
        assert!(matches!(err, Error::UnclosedFaceLoop { face: 0 }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn near_duplicate_does_not_close_the_loop() {
        // Last triple differs from the first in the 15th decimal place:
        // not a closing duplicate, so the loop never closes
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
            vec![
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0, //
                1.0 + 1e-15, 0.0, 0.0,
            ],
        );
        assert!(matches!(
            decode_solid(&record),
            Err(Error::UnclosedFaceLoop { .. })
        ));
    }

    #[test]
    fn face_offset_past_ordinates_is_malformed() {
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 97, 1003, 1],
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        );
        assert!(matches!(
            decode_solid(&record),
            Err(Error::OffsetOutOfRange { offset: 97, .. })
        ));
    }

    #[test]
    fn degenerate_single_vertex_face_terminates() {
        // A face whose loop is a lone triple: the read reaches the end of
        // the ordinates without a repeat and reports the loop malformed
        // instead of spinning
        let record = GeometryRecord::new(
            3008,
            vec![1, 1007, 1, 1, 1006, 1, 1, 1003, 1],
            vec![4.0, 4.0, 4.0],
        );
        assert!(matches!(
            decode_solid(&record),
            Err(Error::UnclosedFaceLoop { .. })
        ));
    }
}
