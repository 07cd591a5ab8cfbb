// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Harvest
//!
//! Pulls email-like addresses out of plain text files. Matching is a
//! permissive pattern scan, not address validation.
//!
//! # Features
//!
//! - Scan-order extraction with byte offsets
//! - Case-insensitive deduplication with a configurable casing pass
//! - One-address-per-line output files
//! - Background jobs reporting over a channel, for UI front-ends
//!
//! # Example
//!
//! ```rust
//! use email_harvest::extract;
//!
//! let emails = extract("a@b.co c@d.org a@b.co", true);
//! assert_eq!(emails, vec!["A@B.Co", "C@D.Org"]);
//! ```

mod error;
mod extractor;
mod io;
mod job;
mod session;
mod worker;

pub use error::{ExtractError, Result};
pub use extractor::*;
pub use io::{default_output_path, read_emails, read_input, write_emails};
pub use job::{ExtractionReport, ExtractionRequest, PREVIEW_LIMIT, Preview};
pub use session::{Notice, STATUS_EXTRACTING, STATUS_READY, Session};
pub use worker::{JobEvent, JobId, Worker};
