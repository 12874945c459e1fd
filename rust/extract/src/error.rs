// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the extraction pipeline.

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum Error {
    /// The dispatcher hit a shape code it cannot route - a contract
    /// violation by the upstream data, never retried.
    #[error("element {element}: {source}")]
    Fatal {
        element: u64,
        #[source]
        source: ifc_spatial_sdo::Error,
    },

    /// Malformed geometry reached a pipeline configured to abort on it
    /// instead of skipping.
    #[error("element {element} has malformed geometry: {source}")]
    Malformed {
        element: u64,
        #[source]
        source: ifc_spatial_sdo::Error,
    },
}
