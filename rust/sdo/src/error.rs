// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometry decoding.

use thiserror::Error;

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a geometry record.
///
/// Every variant except [`Error::UnsupportedShape`] describes malformed
/// input that a batch caller is expected to skip; see
/// [`Error::is_recoverable`].
#[derive(Debug, Error)]
pub enum Error {
    /// The dispatcher has no decoder for this shape code.
    #[error("unsupported geometry shape code {code} (gtype {gtype})")]
    UnsupportedShape { gtype: u32, code: u32 },

    /// A solid record arrived with no ordinates at all.
    #[error("solid geometry has no ordinates")]
    EmptyOrdinates,

    /// The element-info array is empty for a shape that requires it.
    #[error("element info array is empty")]
    EmptyElementInfo,

    /// The element-info array does not divide into whole triplets.
    #[error("element info length {len} is not a multiple of 3")]
    RaggedElementInfo { len: usize },

    /// A lump header or its face triplets run past the element-info array.
    #[error("element info truncated: lump at field {at} needs {needed} fields, {len} present")]
    TruncatedElementInfo { at: usize, needed: usize, len: usize },

    /// A 1-based ordinate offset points outside the ordinate array.
    #[error("ordinate offset {offset} out of range for {len} ordinates")]
    OffsetOutOfRange { offset: u32, len: usize },

    /// A 1-based ordinate offset does not land on a coordinate triple.
    #[error("ordinate offset {offset} is not aligned to a coordinate triple")]
    MisalignedOffset { offset: u32 },

    /// Loop start offsets must strictly increase within one face record.
    #[error("loop offsets not strictly increasing: {prev} followed by {next}")]
    NonIncreasingOffsets { prev: u32, next: u32 },

    /// A face loop ran to the end of the ordinates without ever repeating
    /// its first vertex.
    #[error("face {face} never repeats its first vertex before the ordinates end")]
    UnclosedFaceLoop { face: usize },

    /// A singular POINT record carries no point shortcut.
    #[error("point geometry carries no point shortcut")]
    MissingPoint,
}

impl Error {
    /// `true` for malformed-input conditions the batch caller should skip,
    /// `false` only for the dispatcher's unsupported-shape contract
    /// violation, which aborts the batch.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::UnsupportedShape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_shape_is_fatal() {
        let err = Error::UnsupportedShape { gtype: 3004, code: 4 };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn malformed_input_is_recoverable() {
        assert!(Error::EmptyOrdinates.is_recoverable());
        assert!(Error::UnclosedFaceLoop { face: 0 }.is_recoverable());
        assert!(Error::OffsetOutOfRange { offset: 99, len: 12 }.is_recoverable());
        assert!(Error::MissingPoint.is_recoverable());
    }
}
