//! Report rendering for validation results.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use ukpostcode_core::{validate, Postcode, ValidationError};

/// Outcome for a single candidate.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<Postcode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl Outcome {
    fn check(input: String) -> Self {
        match validate(&input) {
            Ok(postcode) => Self {
                input,
                valid: true,
                postcode: Some(postcode),
                error: None,
            },
            Err(error) => Self {
                input,
                valid: false,
                postcode: None,
                error: Some(error),
            },
        }
    }
}

/// Results for one invocation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub checked_at: DateTime<Utc>,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub results: Vec<Outcome>,
}

impl Report {
    pub fn build(candidates: Vec<String>) -> Self {
        let results: Vec<Outcome> = candidates.into_iter().map(Outcome::check).collect();
        let valid = results.iter().filter(|r| r.valid).count();

        Self {
            checked_at: Utc::now(),
            total: results.len(),
            valid,
            invalid: results.len() - valid,
            results,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> Result<()> {
        for outcome in &self.results {
            match &outcome.error {
                None => writeln!(out, "valid    {}", outcome.input)?,
                Some(error) => writeln!(out, "invalid  {}  ({})", outcome.input, error)?,
            }
        }
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
