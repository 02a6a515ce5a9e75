//! A measurement bundle for embedding in larger text output.

use crate::options::FormatOptions;
use crate::{RenderResult, format_numbers};
use std::fmt;
use uf_core::DecimalNumber;

/// A central value with its uncertainties and labels.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub central: DecimalNumber,
    pub errors: Vec<DecimalNumber>,
    pub labels: Vec<String>,
}

impl Measurement {
    pub fn new(central: DecimalNumber, errors: Vec<DecimalNumber>) -> Self {
        Self {
            central,
            errors,
            labels: Vec::new(),
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Format through the flag-letter spec (see
    /// [`FormatOptions::from_flag_spec`]); the measurement's own labels are
    /// attached.
    pub fn render(&self, spec: &str) -> RenderResult<String> {
        let mut opts = FormatOptions::from_flag_spec(spec);
        opts.labels = self.labels.clone();
        format_numbers(self.central, self.errors.clone(), &opts)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render("").map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
