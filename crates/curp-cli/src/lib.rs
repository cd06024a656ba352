//! # curp-cli — Command-Line CURP Validation
//!
//! Provides the `curp` command-line interface over `curp-core`.
//!
//! ```bash
//! curp POPC990709MGTSRL02
//! curp POPC990709MGTSRL02 -c "CLAUDIA LEONOR POSADA PEREZ"
//! curp POPC990709MGTSRL02 -n CLAUDIA -p POSADA -s PEREZ
//! curp AAAA050101HDFXXX01 --today 2004-01-01 -vv
//! ```
//!
//! The extracted data is printed as one JSON object on stdout. A code or
//! name that fails validation prints the error message instead; both
//! outcomes exit with status 0. Logs go to stderr.

pub mod validate;
