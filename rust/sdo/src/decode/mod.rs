// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry dispatch - routes a record to the decoder for its shape tag.

mod face;
mod line;
mod point;
mod solid;

pub use face::decode_face;
pub use line::decode_segments;
pub use point::decode_points;
pub use solid::decode_solid;

use crate::error::{Error, Result};
use crate::geometry::{Geometry, GeometryClass};
use crate::record::{GeometryRecord, ShapeTag};

/// Decodes a geometry record into its structured form, tagged with the
/// resolved shape classification.
///
/// The multi variants collapse into their singular class: a MULTISOLID
/// decodes through the same path as a SOLID and reports
/// [`GeometryClass::Solid`].
///
/// An unrecognized shape code fails with [`Error::UnsupportedShape`] - the
/// one unrecoverable condition in the decoder family. Every other failure
/// is malformed input the batch caller can skip; see
/// [`Error::is_recoverable`].
pub fn decode_geometry(record: &GeometryRecord) -> Result<(GeometryClass, Geometry)> {
    let shape = record.shape().ok_or(Error::UnsupportedShape {
        gtype: record.gtype,
        code: record.shape_code(),
    })?;

    let geometry = match shape {
        ShapeTag::Solid | ShapeTag::MultiSolid => Geometry::Solid(solid::decode_solid(record)?),
        ShapeTag::Polygon | ShapeTag::MultiPolygon => Geometry::Face(face::decode_face(record)?),
        ShapeTag::Line | ShapeTag::MultiLine => Geometry::Segments(line::decode_segments(record)?),
        ShapeTag::Point | ShapeTag::MultiPoint => Geometry::Points(point::decode_points(record)?),
    };

    Ok((geometry.class(), geometry))
}
