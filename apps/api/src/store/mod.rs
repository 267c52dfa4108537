//! Record store — the candidate fixture, loaded once and read-only afterwards.
//!
//! Loading is the only fallible step. A missing fixture, or one that is not a
//! JSON array, is logged and yields an empty store, so the query path never
//! sees a fault. Inside the array each record is converted on its own: a record
//! that cannot become a `CandidateProfile` is skipped with a warning.

pub mod source;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::candidate::CandidateProfile;
use crate::search::ordering::ResultOrder;
use crate::store::source::CandidateSource;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Candidate source returned status {0}")]
    Status(u16),

    #[error("Invalid candidate JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a fixture document, keeping every record that converts cleanly.
pub fn parse_records(
    bytes: &[u8],
    origin: &str,
) -> Result<Vec<CandidateProfile>, StoreError> {
    let raw: Vec<Value> = serde_json::from_slice(bytes)?;
    let total = raw.len();
    let records: Vec<CandidateProfile> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping candidate record #{index} from {origin}: {e}");
                None
            }
        })
        .collect();
    if records.len() < total {
        warn!(
            "Kept {} of {total} candidate records from {origin}",
            records.len()
        );
    }
    Ok(records)
}

#[derive(Debug)]
pub struct CandidateStore {
    candidates: Vec<CandidateProfile>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl CandidateStore {
    /// Builds a store from already-parsed records. Later records repeating an
    /// earlier id are dropped; the remainder is arranged once by `order`.
    pub fn new(
        candidates: Vec<CandidateProfile>,
        source: impl Into<String>,
        order: ResultOrder,
    ) -> Self {
        let source = source.into();
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if seen.insert(candidate.id.to_string()) {
                unique.push(candidate);
            } else {
                warn!(
                    "Dropping duplicate candidate id '{}' from {source}",
                    candidate.id
                );
            }
        }
        order.arrange(&mut unique);

        Self {
            candidates: unique,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(Vec::new(), source, ResultOrder::Identity)
    }

    /// Loads from `source`, degrading to an empty store on failure.
    pub async fn load(source: &dyn CandidateSource, order: ResultOrder) -> Self {
        let origin = source.describe();
        match source.load().await {
            Ok(candidates) => {
                let store = Self::new(candidates, origin, order);
                info!(
                    "Loaded {} candidates from {} ({:?})",
                    store.len(),
                    store.source,
                    order
                );
                store
            }
            Err(e) => {
                error!("Failed to load candidates from {origin}: {e}. Serving an empty store.");
                Self::empty(origin)
            }
        }
    }

    pub fn candidates(&self) -> &[CandidateProfile] {
        &self.candidates
    }

    pub fn get(&self, id: &str) -> Option<&CandidateProfile> {
        self.candidates.iter().find(|c| c.id.to_string() == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
