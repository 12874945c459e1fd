// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar face decoder - one outer boundary loop plus hole loops.

use crate::error::{Error, Result};
use crate::geometry::PlanarFace;
use crate::ordinates::{LoopOffsets, Ordinates};
use crate::record::GeometryRecord;

/// Decodes a POLYGON or MULTIPOLYGON record into a planar face.
///
/// Each element-info triplet opens one loop; loop `i` runs from its start
/// offset to the next loop's start, and the last loop takes everything
/// remaining. Unlike the solid encoding, face loops are not redundantly
/// closed, so no closing duplicate is stripped.
///
/// The first loop is the outer boundary; subsequent loops are holes, in
/// encoded order.
pub fn decode_face(record: &GeometryRecord) -> Result<PlanarFace> {
    let ords = Ordinates::new(&record.ordinates);
    let offsets = LoopOffsets::parse(&record.element_info)?;

    let mut loops = Vec::with_capacity(offsets.count());
    for i in 0..offsets.count() {
        let offset = offsets.offset(i);
        let start = ords.triple_index(offset)?;
        let end = if i + 1 < offsets.count() {
            let next = offsets.offset(i + 1);
            if next <= offset {
                return Err(Error::NonIncreasingOffsets { prev: offset, next });
            }
            ords.triple_index(next)?
        } else {
            ords.triple_count()
        };

        loops.push(ords.triples(start, end).collect());
    }

    Ok(PlanarFace { loops })
}
