// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry record - the wire image of the spatial store's geometry columns.
//!
//! The store describes one geometry in four columns: a packed type
//! descriptor (`gtype`), an integer element-info array carrying structural
//! offsets, a flat ordinate array carrying coordinates, and an optional
//! dedicated point column used only by the singular POINT shape. This
//! module mirrors that encoding bit for bit; interpretation lives in
//! [`crate::decode`].

/// Shape tag carried in the low two digits of `gtype`.
///
/// Selects which decoding algorithm applies and whether the batch or
/// singular variant is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeTag {
    Point,
    Line,
    Polygon,
    MultiPoint,
    MultiLine,
    MultiPolygon,
    Solid,
    MultiSolid,
}

impl ShapeTag {
    /// Resolves a two-digit shape code. Returns `None` for codes this
    /// system has no decoder for (e.g. heterogeneous collections).
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ShapeTag::Point),
            2 => Some(ShapeTag::Line),
            3 => Some(ShapeTag::Polygon),
            5 => Some(ShapeTag::MultiPoint),
            6 => Some(ShapeTag::MultiLine),
            7 => Some(ShapeTag::MultiPolygon),
            8 => Some(ShapeTag::Solid),
            9 => Some(ShapeTag::MultiSolid),
            _ => None,
        }
    }

    /// The two-digit code this tag is stored as.
    pub fn code(self) -> u32 {
        match self {
            ShapeTag::Point => 1,
            ShapeTag::Line => 2,
            ShapeTag::Polygon => 3,
            ShapeTag::MultiPoint => 5,
            ShapeTag::MultiLine => 6,
            ShapeTag::MultiPolygon => 7,
            ShapeTag::Solid => 8,
            ShapeTag::MultiSolid => 9,
        }
    }

    /// `true` for the multi (batch) variants.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            ShapeTag::MultiPoint | ShapeTag::MultiLine | ShapeTag::MultiPolygon | ShapeTag::MultiSolid
        )
    }
}

/// Element-type code for a polygon boundary loop.
pub const ETYPE_POLYGON: u32 = 1003;
/// Element-type code for the composite surface bounding a solid lump.
pub const ETYPE_COMPOSITE_SURFACE: u32 = 1006;
/// Element-type code opening a solid lump.
pub const ETYPE_SOLID: u32 = 1007;

/// One row's geometry columns, exactly as stored.
///
/// `gtype` packs `D*1000 + L*100 + TT`: `D` is the dimensionality (always
/// 3 in this system), `L` the linear-referencing measure dimension (0 when
/// absent), `TT` the shape code (see [`ShapeTag::from_code`]).
///
/// All offsets inside `element_info` are **1-based** positions into
/// `ordinates`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryRecord {
    /// Packed type descriptor.
    pub gtype: u32,
    /// Structural offsets; semantics depend on the shape tag.
    pub element_info: Vec<u32>,
    /// Flattened coordinate triples (sextuples for the line shapes).
    pub ordinates: Vec<f64>,
    /// Dedicated single-point column, consulted only for the POINT shape.
    pub point: Option<[f64; 3]>,
}

impl GeometryRecord {
    /// Creates a record from its array columns, with no point shortcut.
    pub fn new(gtype: u32, element_info: Vec<u32>, ordinates: Vec<f64>) -> Self {
        Self {
            gtype,
            element_info,
            ordinates,
            point: None,
        }
    }

    /// Creates a singular point record carried in the point column.
    pub fn with_point(gtype: u32, point: [f64; 3]) -> Self {
        Self {
            gtype,
            element_info: Vec::new(),
            ordinates: Vec::new(),
            point: Some(point),
        }
    }

    /// Coordinate dimensionality (the thousands digit of `gtype`).
    pub fn dimensionality(&self) -> u32 {
        self.gtype / 1000
    }

    /// Which ordinate position carries the linear-referencing measure
    /// (the hundreds digit of `gtype`), 0 when none does.
    pub fn lrs_dimension(&self) -> u32 {
        (self.gtype / 100) % 10
    }

    /// Whether the record carries a linear-referencing measure. Part of
    /// the wire shape; nothing downstream consumes it.
    pub fn has_lrs(&self) -> bool {
        self.lrs_dimension() != 0
    }

    /// The raw two-digit shape code.
    pub fn shape_code(&self) -> u32 {
        self.gtype % 100
    }

    /// The resolved shape tag, `None` for unsupported codes.
    pub fn shape(&self) -> Option<ShapeTag> {
        ShapeTag::from_code(self.shape_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtype_unpacks() {
        let record = GeometryRecord::new(3008, vec![], vec![]);
        assert_eq!(record.dimensionality(), 3);
        assert!(!record.has_lrs());
        assert_eq!(record.shape(), Some(ShapeTag::Solid));
    }

    #[test]
    fn lrs_digit_is_exposed_but_separate_from_shape() {
        // 3D line with the measure in the 4th ordinate position
        let record = GeometryRecord::new(3402, vec![], vec![]);
        assert_eq!(record.dimensionality(), 3);
        assert_eq!(record.lrs_dimension(), 4);
        assert!(record.has_lrs());
        assert_eq!(record.shape(), Some(ShapeTag::Line));
    }

    #[test]
    fn unknown_code_has_no_tag() {
        // 04 is the heterogeneous collection code, unsupported here
        let record = GeometryRecord::new(3004, vec![], vec![]);
        assert_eq!(record.shape(), None);
        assert_eq!(record.shape_code(), 4);
    }

    #[test]
    fn tag_codes_round_trip() {
        for code in [1, 2, 3, 5, 6, 7, 8, 9] {
            let tag = ShapeTag::from_code(code).unwrap();
            assert_eq!(tag.code(), code);
        }
        assert_eq!(ShapeTag::from_code(0), None);
        assert_eq!(ShapeTag::from_code(4), None);
        assert_eq!(ShapeTag::from_code(10), None);
    }

    #[test]
    fn multi_variants() {
        assert!(ShapeTag::MultiSolid.is_multi());
        assert!(!ShapeTag::Solid.is_multi());
    }
}
