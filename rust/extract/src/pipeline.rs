// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch decode pipeline.
//!
//! Walks (element, geometry record) pairs, decodes each record through the
//! dispatcher, and hands finished geometry rows to the insert layer in
//! commit-interval batches. Malformed geometry is skipped and logged;
//! the dispatcher's unsupported-shape failure aborts the run.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::rows::{ElementRow, GeometryRow};
use ifc_spatial_sdo::{decode_geometry, GeometryRecord};

/// One unit of pipeline input: an element and its stored geometry.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub element: ElementRow,
    pub record: GeometryRecord,
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Elements whose geometry decoded and produced a row.
    pub loaded: usize,
    /// Elements skipped for malformed geometry.
    pub skipped: usize,
    /// Batches handed to the insert layer.
    pub batches: usize,
}

/// The batch extraction pipeline.
///
/// Synchronous and stateless between runs; safe to drive from multiple
/// threads over disjoint inputs.
#[derive(Debug)]
pub struct Pipeline<'a> {
    config: &'a Config,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Runs the pipeline over `inputs`, calling `commit` once per full
    /// batch (and once for the final partial batch, if any).
    ///
    /// Recoverable decode failures skip the element unless the
    /// configuration says to abort; the dispatcher's unsupported-shape
    /// failure always aborts.
    pub fn run<I, F>(&self, inputs: I, mut commit: F) -> Result<ExtractSummary>
    where
        I: IntoIterator<Item = ExtractInput>,
        F: FnMut(Vec<GeometryRow>),
    {
        let mut batch: Vec<GeometryRow> = Vec::with_capacity(self.config.batch_size);
        let mut summary = ExtractSummary {
            loaded: 0,
            skipped: 0,
            batches: 0,
        };

        for input in inputs {
            let element_id = input.element.element_id;
            match decode_geometry(&input.record) {
                Ok((_, geometry)) => {
                    batch.push(GeometryRow::derive(element_id, &geometry));
                    summary.loaded += 1;
                    if batch.len() >= self.config.batch_size {
                        debug!(rows = batch.len(), "committing geometry batch");
                        commit(std::mem::take(&mut batch));
                        summary.batches += 1;
                    }
                }
                Err(source) if source.is_recoverable() => {
                    if self.config.abort_on_malformed {
                        return Err(Error::Malformed {
                            element: element_id,
                            source,
                        });
                    }
                    warn!(element = element_id, error = %source, "skipping malformed geometry");
                    summary.skipped += 1;
                }
                Err(source) => {
                    return Err(Error::Fatal {
                        element: element_id,
                        source,
                    });
                }
            }
        }

        if !batch.is_empty() {
            debug!(rows = batch.len(), "committing final geometry batch");
            commit(batch);
            summary.batches += 1;
        }

        info!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            batches = summary.batches,
            "extraction run finished"
        );
        Ok(summary)
    }
}
