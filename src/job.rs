//! A single read → extract → write run

use crate::error::{ExtractError, Result};
use crate::extractor::{ExtractOptions, extract_with};
use crate::io::{read_input, write_emails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of results shown in the preview pane
pub const PREVIEW_LIMIT: usize = 20;

/// Everything needed to run one extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ExtractOptions,
}

impl ExtractionRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        options: ExtractOptions,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options,
        }
    }

    /// Build a request from raw form fields, rejecting it before any work
    /// starts if the input does not exist or the output is blank.
    pub fn from_fields(input: &str, output: &str, options: ExtractOptions) -> Result<Self> {
        let input = input.trim();
        let output = output.trim();

        if input.is_empty() || !Path::new(input).exists() {
            return Err(ExtractError::InvalidInput);
        }
        if output.is_empty() {
            return Err(ExtractError::MissingOutput);
        }

        Ok(Self::new(input, output, options))
    }

    /// Read the input, extract, write the output
    pub fn run(&self) -> Result<ExtractionReport> {
        let started_at = Utc::now();
        debug!(
            "Extracting from {} into {}",
            self.input.display(),
            self.output.display()
        );

        let text = read_input(&self.input)?;
        let emails = extract_with(&text, &self.options);
        write_emails(&self.output, &emails)?;

        let report = ExtractionReport {
            input: self.input.clone(),
            output: self.output.clone(),
            emails,
            started_at,
            finished_at: Utc::now(),
        };
        info!("{}", report.status_line());

        Ok(report)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub emails: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExtractionReport {
    #[must_use]
    pub const fn count(&self) -> usize {
        self.emails.len()
    }

    /// Status bar text, naming only the output file
    #[must_use]
    pub fn status_line(&self) -> String {
        let name = self.output.file_name().map_or_else(
            || self.output.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        format!("Extracted {} emails to {name}", self.count())
    }

    #[must_use]
    pub fn preview(&self) -> Preview {
        Preview::new(&self.emails, PREVIEW_LIMIT)
    }
}

/// The first few results plus how many were left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub shown: Vec<String>,
    pub remaining: usize,
}

impl Preview {
    #[must_use]
    pub fn new(emails: &[String], limit: usize) -> Self {
        let shown = emails.iter().take(limit).cloned().collect::<Vec<_>>();
        let remaining = emails.len() - shown.len();
        Self { shown, remaining }
    }

    /// Preview pane text
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for email in &self.shown {
            writeln!(f, "{email}")?;
        }
        if self.remaining > 0 {
            write!(f, "\n... and {} more", self.remaining)?;
        }
        Ok(())
    }
}
