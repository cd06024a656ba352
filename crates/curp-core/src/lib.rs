//! # curp-core — CURP Parsing and Validation
//!
//! The CURP (*Clave Única de Registro de Población*) is the 18-character
//! personal identity code issued in Mexico. This crate verifies a code,
//! extracts what it encodes (birth date, sex, birth region) and checks
//! whether supplied names agree with the letters derived from them.
//!
//! ```text
//!  P O P C 9 9 0 7 0 9 M G T S R L 0 2
//!  └─┬───┘ └────┬────┘ │ └┬┘ └─┬─┘ │ └─ verification digit
//!  names      date     sex region │  └── homoclave
//!                            consonants
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Validated construction.** A [`Curp`] exists only after every rule
//!    passed. There is no partially valid object.
//!
//! 2. **First failure wins.** Rules run in a fixed order (length, checksum,
//!    fields, name classes, names) and construction returns the first
//!    [`CurpError`]. [`CurpError::kind()`] groups errors for callers that
//!    only need the broad category.
//!
//! 3. **Pure functions over static tables.** Regions, inconvenient words
//!    and name vocabularies are process-wide read-only data built once.
//!    Everything is safe to call from any thread.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Logging through `tracing` at `debug`/`trace` only; no subscriber is
//!   installed here.

pub mod checksum;
pub mod curp;
pub mod error;
pub mod features;
pub mod fields;
pub mod layout;
pub mod matcher;
pub mod profanity;
pub mod region;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use curp::{Curp, CurpBuilder};
pub use error::{CurpError, ErrorKind};
pub use features::{NameRules, WordFeatures};
pub use fields::Sex;
pub use layout::{Field, CURP_LENGTH};
pub use matcher::{FullName, NameMatcher, ParseState};
pub use profanity::ProfanityTable;
pub use region::Region;
