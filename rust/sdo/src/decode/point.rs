// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point decoder - a single point or a batch of independent points.

use nalgebra::Point3;

use crate::error::{Error, Result};
use crate::ordinates::Ordinates;
use crate::record::{GeometryRecord, ShapeTag};

/// Decodes a POINT or MULTIPOINT record.
///
/// The batch form reads consecutive ordinate triples in array order,
/// without consulting element info. The singular form returns the record's
/// dedicated point column and ignores both arrays entirely; a singular
/// record without that column is malformed.
pub fn decode_points(record: &GeometryRecord) -> Result<Vec<Point3<f64>>> {
    if record.shape() == Some(ShapeTag::MultiPoint) {
        let ords = Ordinates::new(&record.ordinates);
        return Ok((0..ords.triple_count())
            .filter_map(|k| ords.triple(k))
            .collect());
    }

    let [x, y, z] = record.point.ok_or(Error::MissingPoint)?;
    Ok(vec![Point3::new(x, y, z)])
}
