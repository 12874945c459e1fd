// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Spatial Extract
//!
//! The relational extraction boundary: plain serializable row structs for
//! the tables the ETL fills, an immutable unit-symbol table, and the batch
//! pipeline that decodes geometry records, skips malformed elements, and
//! hands finished rows to the bulk-insert layer in commit-interval
//! batches.
//!
//! The pipeline is synchronous and pure apart from `tracing` output;
//! cancellation, retry, and transaction handling belong to the caller.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rows;
pub mod units;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{ExtractInput, ExtractSummary, Pipeline};
pub use rows::{ContainmentRow, ElementRow, GeometryRow, MaterialRow, TypeRow};
pub use units::{si_prefix_multiplier, UnitEntry, UnitTable};
