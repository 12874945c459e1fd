// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line decoder - independent segments from flat coordinate sextuples.

use crate::error::Result;
use crate::geometry::LineSegment;
use crate::ordinates::Ordinates;
use crate::record::GeometryRecord;

/// Decodes a LINE or MULTILINE record.
///
/// Every six consecutive ordinates form one segment - start (x, y, z) then
/// end (x, y, z) - in array order. Element info is not consulted for this
/// shape, and a trailing partial sextuple is not emitted.
pub fn decode_segments(record: &GeometryRecord) -> Result<Vec<LineSegment>> {
    let ords = Ordinates::new(&record.ordinates);
    Ok((0..ords.sextuple_count())
        .filter_map(|k| ords.sextuple(k))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn twelve_ordinates_decode_to_two_segments() {
        let record = GeometryRecord::new(
            3006,
            vec![],
            vec![
                0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                5.0, 5.0, 5.0, 5.0, 5.0, 9.0,
            ],
        );
        let segments = decode_segments(&record).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(segments[0].end, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(segments[1].start, Point3::new(5.0, 5.0, 5.0));
        assert_eq!(segments[1].end, Point3::new(5.0, 5.0, 9.0));
    }

    #[test]
    fn truncated_remainder_is_not_emitted() {
        // 8 ordinates: one whole sextuple plus a dangling pair
        let record = GeometryRecord::new(
            3002,
            vec![],
            vec![0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 9.0, 9.0],
        );
        let segments = decode_segments(&record).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].length(), 2.0);
    }

    #[test]
    fn empty_ordinates_yield_no_segments() {
        let record = GeometryRecord::new(3002, vec![], vec![]);
        assert!(decode_segments(&record).unwrap().is_empty());
    }
}
