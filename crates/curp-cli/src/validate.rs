//! # Validate Command
//!
//! Builds a [`Curp`] from the command-line arguments and reports either the
//! extracted data as JSON or the reason the code was rejected.
//!
//! A rejected code is a normal outcome, not a failure of the tool: its
//! message goes to stdout and the exit status stays 0. Only operational
//! errors (a malformed `--today`, JSON encoding) surface as `Err`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use curp_core::Curp;

/// Arguments of the `curp` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// The CURP to analyze.
    #[arg(value_name = "CURP")]
    pub curp: String,

    /// Given name to validate the CURP against.
    #[arg(short = 'n', long = "nombre")]
    pub given_name: Option<String>,

    /// First (paternal) surname to validate the CURP against.
    #[arg(short = 'p', long = "primer-apellido")]
    pub first_surname: Option<String>,

    /// Second (maternal) surname to validate the CURP against.
    #[arg(short = 's', long = "segundo-apellido")]
    pub second_surname: Option<String>,

    /// Full name to split and validate. Ignored if any name part is given.
    #[arg(short = 'c', long = "nombre-completo")]
    pub full_name: Option<String>,

    /// Reference date for resolving the birth century (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

/// Validate and render the outcome as the text to print.
pub fn render(args: &ValidateArgs) -> Result<String> {
    let mut builder = Curp::builder(args.curp.as_str());
    if let Some(name) = &args.given_name {
        builder = builder.given_name(name.as_str());
    }
    if let Some(surname) = &args.first_surname {
        builder = builder.first_surname(surname.as_str());
    }
    if let Some(surname) = &args.second_surname {
        builder = builder.second_surname(surname.as_str());
    }
    if let Some(full_name) = &args.full_name {
        builder = builder.full_name(full_name.as_str());
    }
    if let Some(today) = &args.today {
        let date = NaiveDate::parse_from_str(today, "%Y-%m-%d")
            .with_context(|| format!("invalid --today date \"{today}\""))?;
        builder = builder.reference_date(date);
    }

    match builder.build() {
        Ok(curp) => {
            tracing::info!(curp = %curp, "CURP is valid");
            curp.to_json().context("failed to encode CURP as JSON")
        }
        Err(err) => {
            tracing::info!(kind = ?err.kind(), "CURP rejected");
            Ok(err.to_string())
        }
    }
}

/// Execute the command.
///
/// Returns exit code 0 whether or not the CURP is valid.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    println!("{}", render(args)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(curp: &str) -> ValidateArgs {
        ValidateArgs {
            curp: curp.to_string(),
            today: Some("2026-10-18".to_string()),
            ..ValidateArgs::default()
        }
    }

    #[test]
    fn valid_code_renders_json() {
        let out = render(&args("SABC560626MDFLRN01")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["curp"], "SABC560626MDFLRN01");
        assert_eq!(json["fecha_nacimiento"], "1956-06-26");
        assert!(json.get("nombre").is_none());
    }

    #[test]
    fn full_name_is_split() {
        let out = render(&ValidateArgs {
            full_name: Some("CLAUDIA LEONOR POSADA PEREZ".to_string()),
            ..args("POPC990709MGTSRL02")
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["nombre"], "CLAUDIA LEONOR");
        assert_eq!(json["segundo_apellido"], "PEREZ");
    }

    #[test]
    fn partial_names_override_full_name() {
        let out = render(&ValidateArgs {
            given_name: Some("claudia".to_string()),
            full_name: Some("SOMEONE ELSE".to_string()),
            ..args("POPC990709MGTSRL02")
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["nombre"], "CLAUDIA");
        assert!(json.get("primer_apellido").is_none());
    }

    #[test]
    fn rejected_code_renders_message() {
        let out = render(&args("MACD990727MMMCRRN0")).unwrap();
        assert!(out.contains("length"), "{out}");
        assert_eq!(run_validate(&args("MACD990727MMMCRRN0")).unwrap(), 0);
    }

    #[test]
    fn rejected_name_renders_message() {
        let out = render(&ValidateArgs {
            first_surname: Some("GARCIA".to_string()),
            ..args("POPC990709MGTSRL02")
        })
        .unwrap();
        assert!(out.contains("GARCIA"), "{out}");
    }

    #[test]
    fn bad_reference_date_is_operational_error() {
        let result = render(&ValidateArgs {
            today: Some("18/10/2026".to_string()),
            ..args("POPC990709MGTSRL02")
        });
        assert!(result.is_err());
    }
}
