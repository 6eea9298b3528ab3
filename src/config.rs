//! Evaluation options.
//!
//! Options ride along with a [`Stream`](crate::Stream) (see
//! [`Stream::with_options`](crate::Stream::with_options)) and are handed to
//! every evaluation of it. They can be built in code or loaded from JSON;
//! missing fields fall back to their defaults.
//!
//! ```
//! use ironstream::EvalOptions;
//!
//! let opts = EvalOptions::from_json(r#"{ "label": "ingest" }"#).unwrap();
//! assert_eq!(opts.label.as_deref(), Some("ingest"));
//! assert_eq!(opts.sort_capacity, EvalOptions::DEFAULT_SORT_CAPACITY);
//! ```

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Name recorded on the tracing span of each evaluation.
    pub label: Option<String>,
    /// Initial buffer capacity of each sort barrier. A hint: barriers never
    /// preallocate more than [`MAX_SORT_CAPACITY`](Self::MAX_SORT_CAPACITY).
    pub sort_capacity: usize,
}

impl EvalOptions {
    pub const DEFAULT_SORT_CAPACITY: usize = 16;
    /// Upper bound on the preallocated sort buffer, in elements.
    pub const MAX_SORT_CAPACITY: usize = 1 << 16;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            label: None,
            sort_capacity: Self::DEFAULT_SORT_CAPACITY,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_sort_capacity(mut self, capacity: usize) -> Self {
        self.sort_capacity = capacity;
        self
    }

    /// Sort buffer capacity actually preallocated by a sort barrier.
    #[must_use]
    pub fn sort_buffer_capacity(&self) -> usize {
        self.sort_capacity.min(Self::MAX_SORT_CAPACITY)
    }

    /// Check that every option is within its supported range.
    ///
    /// # Errors
    /// Fails if `sort_capacity` exceeds [`MAX_SORT_CAPACITY`](Self::MAX_SORT_CAPACITY).
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sort_capacity <= Self::MAX_SORT_CAPACITY,
            "sort_capacity {} exceeds the maximum of {}",
            self.sort_capacity,
            Self::MAX_SORT_CAPACITY
        );
        Ok(())
    }

    /// Parse options from a JSON object.
    ///
    /// # Errors
    /// Fails if `json` is not an object matching the option fields, or if a
    /// value is out of range (see [`validate`](Self::validate)).
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).context("invalid evaluation options")?;
        options.validate().context("invalid evaluation options")?;
        Ok(options)
    }

    /// # Errors
    /// Propagates serialization failures.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serializing evaluation options")
    }
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self::new()
    }
}
