//! # Validated CURP
//!
//! [`Curp`] is the result of full validation: a code whose checksum,
//! fields and (optionally) name parts have all been checked. A `Curp`
//! cannot exist in a partially valid state; construction either succeeds
//! or returns the first rule that failed.
//!
//! ## Validation order
//!
//! 1. Length (18 characters).
//! 2. Verification digit (which also rejects characters outside `0-9A-Z`).
//! 3. Birth date, sex, region.
//! 4. Classes of the name-derived positions and the inconvenient-word prefix.
//! 5. Name parts: given name, first surname, second surname, in that order.
//!    When none of them is supplied, the full name is split instead.
//!
//! ## Serialization
//!
//! A `Curp` serializes to the map consumed by downstream systems:
//!
//! ```json
//! {"curp":"POPC990709MGTSRL02","sexo":2,"fecha_nacimiento":"1999-07-09",
//!  "entidad_nacimiento":{"name":"Guanajuato","iso":"MX-GUA"},
//!  "nombre":"CLAUDIA LEONOR","primer_apellido":"POSADA","segundo_apellido":"PEREZ"}
//! ```
//!
//! Name keys are omitted, not null, when the part was not supplied.
//! Deserialization accepts either that map or a bare code string. Both
//! forms go back through [`CurpBuilder`], so the code and any name parts
//! are re-validated; the derived keys of the map are recomputed, not read.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::CurpError;
use crate::fields::{self, Sex};
use crate::layout::{self, CURP_LENGTH};
use crate::matcher::{FullName, NameMatcher};
use crate::profanity::ProfanityTable;
use crate::region::Region;

/// A fully validated CURP with the data extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curp {
    code: String,
    birth_date: NaiveDate,
    sex: Sex,
    region: &'static Region,
    given_name: Option<String>,
    first_surname: Option<String>,
    second_surname: Option<String>,
}

impl Curp {
    /// Validate a bare code, without name checks.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule, see the module docs for the order.
    pub fn new(code: impl Into<String>) -> Result<Self, CurpError> {
        Self::builder(code).build()
    }

    /// Start building a `Curp` with name parts or a pinned reference date.
    pub fn builder(code: impl Into<String>) -> CurpBuilder {
        CurpBuilder::new(code)
    }

    /// The code as supplied.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Birth date, with the century resolved at construction.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Sex encoded at offset 10.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Birth region record.
    pub fn region(&self) -> &'static Region {
        self.region
    }

    /// Display name of the birth region.
    pub fn region_name(&self) -> &'static str {
        self.region.name
    }

    /// ISO 3166-2 code of the birth region, `None` when born abroad.
    pub fn region_iso(&self) -> Option<&'static str> {
        self.region.iso
    }

    /// Whether the person was born outside Mexico.
    pub fn is_foreign_born(&self) -> bool {
        self.region.is_foreign()
    }

    /// Given name(s), upper-cased, if supplied.
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    /// First surname, upper-cased, if supplied.
    pub fn first_surname(&self) -> Option<&str> {
        self.first_surname.as_deref()
    }

    /// Second surname, upper-cased, if supplied. `Some("")` when a full
    /// name was split for a person without second surname.
    pub fn second_surname(&self) -> Option<&str> {
        self.second_surname.as_deref()
    }

    /// Whether the code allows an empty first surname. Implies an empty
    /// second surname as well.
    pub fn first_surname_may_be_empty(&self) -> bool {
        self.matcher().first_surname_may_be_empty()
    }

    /// Whether the code allows an empty second surname.
    pub fn second_surname_may_be_empty(&self) -> bool {
        self.matcher().second_surname_may_be_empty()
    }

    /// Name matcher bound to this code.
    pub fn matcher(&self) -> NameMatcher<'_> {
        NameMatcher::new(&self.code)
    }

    /// Short form showing only the four name initials: `<CURP [POPC]>`.
    pub fn short(&self) -> String {
        format!("<CURP [{}]>", layout::slice(&self.code, layout::NAME_PREFIX))
    }

    /// Serialize to a compact JSON object.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for Curp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl FromStr for Curp {
    type Err = CurpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Curp {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

// ─── Serde ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CurpRecord<'a> {
    curp: &'a str,
    sexo: Sex,
    fecha_nacimiento: NaiveDate,
    entidad_nacimiento: &'a Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    nombre: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primer_apellido: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    segundo_apellido: Option<&'a str>,
}

impl Serialize for Curp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CurpRecord {
            curp: &self.code,
            sexo: self.sex,
            fecha_nacimiento: self.birth_date,
            entidad_nacimiento: self.region,
            nombre: self.given_name(),
            primer_apellido: self.first_surname(),
            segundo_apellido: self.second_surname(),
        }
        .serialize(serializer)
    }
}

/// The two accepted input forms: the serialized map, or a bare code.
#[derive(Deserialize)]
#[serde(untagged)]
enum CurpInput {
    Code(String),
    Record {
        curp: String,
        #[serde(default)]
        nombre: Option<String>,
        #[serde(default)]
        primer_apellido: Option<String>,
        #[serde(default)]
        segundo_apellido: Option<String>,
    },
}

impl CurpInput {
    fn into_builder(self) -> CurpBuilder {
        match self {
            Self::Code(code) => CurpBuilder::new(code),
            Self::Record {
                curp,
                nombre,
                primer_apellido,
                segundo_apellido,
            } => CurpBuilder {
                given_name: nombre,
                first_surname: primer_apellido,
                second_surname: segundo_apellido,
                ..CurpBuilder::new(curp)
            },
        }
    }
}

/// Routes through the validating builder, so invalid codes and names are
/// rejected at deserialization time rather than silently accepted.
impl<'de> Deserialize<'de> for Curp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CurpInput::deserialize(deserializer)?
            .into_builder()
            .build()
            .map_err(serde::de::Error::custom)
    }
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Collects the optional inputs of a [`Curp`] before validating them.
///
/// Partial name parts take precedence: when any of given name, first
/// surname or second surname is set, the full name is ignored.
#[derive(Debug, Clone, Default)]
pub struct CurpBuilder {
    code: String,
    given_name: Option<String>,
    first_surname: Option<String>,
    second_surname: Option<String>,
    full_name: Option<String>,
    reference_date: Option<NaiveDate>,
}

impl CurpBuilder {
    /// Builder for `code` with no name parts and today as reference date.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Given name(s) to check against positions 3 and 15.
    pub fn given_name(mut self, name: impl Into<String>) -> Self {
        self.given_name = Some(name.into());
        self
    }

    /// First surname to check against positions 0, 1 and 13.
    pub fn first_surname(mut self, surname: impl Into<String>) -> Self {
        self.first_surname = Some(surname.into());
        self
    }

    /// Second surname to check against positions 2 and 14.
    pub fn second_surname(mut self, surname: impl Into<String>) -> Self {
        self.second_surname = Some(surname.into());
        self
    }

    /// Full name to split against the code. Ignored if any part is set.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Date used to resolve the birth century. Defaults to today (UTC).
    pub fn reference_date(mut self, today: NaiveDate) -> Self {
        self.reference_date = Some(today);
        self
    }

    /// Run every validation rule and build the `Curp`.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule.
    pub fn build(self) -> Result<Curp, CurpError> {
        let result = self.validate();
        if let Err(err) = &result {
            tracing::debug!(error = %err, kind = ?err.kind(), "CURP rejected");
        }
        result
    }

    fn validate(self) -> Result<Curp, CurpError> {
        let code = self.code;
        let found = code.chars().count();
        if found != CURP_LENGTH {
            return Err(CurpError::Length { found });
        }
        checksum::verify(&code)?;

        let today = self.reference_date.unwrap_or_else(|| Utc::now().date_naive());
        let birth_date = fields::parse_birth_date(&code, today)?;
        let sex = fields::parse_sex(&code)?;
        let region = fields::parse_region(&code)?;
        fields::validate_name_chars(&code, ProfanityTable::standard())?;

        let matcher = NameMatcher::new(&code);
        let mut given_name = None;
        let mut first_surname = None;
        let mut second_surname = None;

        if let Some(name) = self.given_name.as_deref() {
            if !matcher.matches_given_name(name) {
                return Err(CurpError::Name(name.to_string()));
            }
            given_name = Some(name.to_uppercase());
        }
        if let Some(surname) = self.first_surname.as_deref() {
            if !matcher.matches_first_surname(surname) {
                return Err(CurpError::FirstSurname(surname.to_string()));
            }
            first_surname = Some(surname.to_uppercase());
        }
        if let Some(surname) = self.second_surname.as_deref() {
            if !matcher.matches_second_surname(surname) {
                return Err(CurpError::SecondSurname(surname.to_string()));
            }
            second_surname = Some(surname.to_uppercase());
        }

        let no_parts = given_name.is_none() && first_surname.is_none() && second_surname.is_none();
        if let Some(full) = self.full_name.as_deref().filter(|_| no_parts) {
            let FullName {
                given_name: g,
                first_surname: f,
                second_surname: s,
            } = matcher
                .split_full_name(full)
                .ok_or_else(|| CurpError::FullName(full.to_string()))?;
            given_name = Some(g.to_uppercase());
            first_surname = Some(f.to_uppercase());
            second_surname = Some(s.to_uppercase());
        }

        Ok(Curp {
            birth_date,
            sex,
            region,
            given_name,
            first_surname,
            second_surname,
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn builder(code: &str) -> CurpBuilder {
        Curp::builder(code).reference_date(today())
    }

    #[test]
    fn bare_code_extracts_fields() {
        let curp = builder("POPC990709MGTSRL02").build().unwrap();
        assert_eq!(curp.code(), "POPC990709MGTSRL02");
        assert_eq!(curp.birth_date(), NaiveDate::from_ymd_opt(1999, 7, 9).unwrap());
        assert_eq!(curp.sex(), Sex::Female);
        assert_eq!(curp.region_name(), "Guanajuato");
        assert_eq!(curp.region_iso(), Some("MX-GUA"));
        assert!(!curp.is_foreign_born());
        assert_eq!(curp.given_name(), None);
        assert_eq!(curp.first_surname(), None);
        assert_eq!(curp.second_surname(), None);
    }

    #[test]
    fn display_and_short_forms() {
        let curp = builder("POPC990709MGTSRL02").build().unwrap();
        assert_eq!(curp.to_string(), "POPC990709MGTSRL02");
        assert_eq!(curp.short(), "<CURP [POPC]>");
    }

    #[test]
    fn name_parts_are_upper_cased() {
        let curp = builder("POPC990709MGTSRL02")
            .given_name("Claudia Leonor")
            .first_surname("Posada")
            .second_surname("Pérez")
            .build()
            .unwrap();
        assert_eq!(curp.given_name(), Some("CLAUDIA LEONOR"));
        assert_eq!(curp.first_surname(), Some("POSADA"));
        assert_eq!(curp.second_surname(), Some("PÉREZ"));
    }

    #[test]
    fn only_supplied_parts_are_checked() {
        let curp = builder("POPC990709MGTSRL02")
            .first_surname("POSADA")
            .build()
            .unwrap();
        assert_eq!(curp.given_name(), None);
        assert_eq!(curp.first_surname(), Some("POSADA"));
    }

    #[test]
    fn name_mismatches_in_order() {
        let err = builder("POPC990709MGTSRL02")
            .given_name("LEONOR")
            .first_surname("GARCIA")
            .build()
            .unwrap_err();
        assert_eq!(err, CurpError::Name("LEONOR".to_string()));

        let err = builder("POPC990709MGTSRL02")
            .first_surname("GARCIA")
            .second_surname("GARCIA")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FirstSurname);

        let err = builder("POPC990709MGTSRL02")
            .second_surname("GARCIA")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SecondSurname);
    }

    #[test]
    fn full_name_populates_all_parts() {
        let curp = builder("TAXA990915MNEMXM06")
            .full_name("Amber Nicole Tamayo")
            .build()
            .unwrap();
        assert_eq!(curp.given_name(), Some("AMBER NICOLE"));
        assert_eq!(curp.first_surname(), Some("TAMAYO"));
        assert_eq!(curp.second_surname(), Some(""));
        assert!(curp.is_foreign_born());
        assert_eq!(curp.region_iso(), None);
    }

    #[test]
    fn parts_take_precedence_over_full_name() {
        let curp = builder("POPC990709MGTSRL02")
            .given_name("CLAUDIA")
            .full_name("NOT A MATCHING NAME")
            .build()
            .unwrap();
        assert_eq!(curp.given_name(), Some("CLAUDIA"));
        assert_eq!(curp.first_surname(), None);
    }

    #[test]
    fn mismatched_full_name_fails() {
        let err = builder("POPC990709MGTSRL02")
            .full_name("LEONOR POSADA PEREZ")
            .build()
            .unwrap_err();
        assert_eq!(err, CurpError::FullName("LEONOR POSADA PEREZ".to_string()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let err = builder("POPC990709MGTSRLÑ").build().unwrap_err();
        assert_eq!(err, CurpError::Length { found: 17 });
    }

    #[test]
    fn empty_surname_rules() {
        let curp = builder("TAXA990915MNEMXM06").build().unwrap();
        assert!(curp.second_surname_may_be_empty());
        assert!(!curp.first_surname_may_be_empty());
    }

    #[test]
    fn serializes_without_absent_names() {
        let curp = builder("POPC990709MGTSRL02").build().unwrap();
        let json: serde_json::Value = serde_json::from_str(&curp.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "curp": "POPC990709MGTSRL02",
                "sexo": 2,
                "fecha_nacimiento": "1999-07-09",
                "entidad_nacimiento": {"name": "Guanajuato", "iso": "MX-GUA"},
            })
        );
    }

    #[test]
    fn serializes_names_and_null_iso() {
        let curp = builder("TAXA990915MNEMXM06")
            .full_name("AMBER NICOLE TAMAYO")
            .build()
            .unwrap();
        let json = serde_json::to_value(&curp).unwrap();
        assert_eq!(json["entidad_nacimiento"]["iso"], serde_json::Value::Null);
        assert_eq!(json["nombre"], "AMBER NICOLE");
        assert_eq!(json["primer_apellido"], "TAMAYO");
        assert_eq!(json["segundo_apellido"], "");
    }

    #[test]
    fn key_order_is_stable() {
        let curp = builder("POPC990709MGTSRL02")
            .full_name("CLAUDIA LEONOR POSADA PEREZ")
            .build()
            .unwrap();
        let text = curp.to_json().unwrap();
        let keys = [
            "\"curp\"",
            "\"sexo\"",
            "\"fecha_nacimiento\"",
            "\"entidad_nacimiento\"",
            "\"nombre\"",
            "\"primer_apellido\"",
            "\"segundo_apellido\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    }

    #[test]
    fn deserialize_validates() {
        let curp: Curp = serde_json::from_str("\"SABC560626MDFLRN01\"").unwrap();
        assert_eq!(curp.sex(), Sex::Female);
        assert!(serde_json::from_str::<Curp>("\"SABC560626MDFLRN02\"").is_err());
        assert!(serde_json::from_str::<Curp>("\"SHORT\"").is_err());
    }

    #[test]
    fn deserialize_map_revalidates_names() {
        let ok: Curp = serde_json::from_value(serde_json::json!({
            "curp": "POPC990709MGTSRL02",
            "sexo": 2,
            "nombre": "CLAUDIA",
            "primer_apellido": "POSADA",
        }))
        .unwrap();
        assert_eq!(ok.given_name(), Some("CLAUDIA"));
        assert_eq!(ok.second_surname(), None);

        let bad = serde_json::from_value::<Curp>(serde_json::json!({
            "curp": "POPC990709MGTSRL02",
            "primer_apellido": "GARCIA",
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn empty_first_surname_from_full_name() {
        let prefix = "XXXC990709MGTXXL0";
        let code = format!("{prefix}{}", checksum::check_digit(prefix).unwrap());
        let curp = builder(&code).full_name("Claudia").build().unwrap();
        assert!(curp.first_surname_may_be_empty());
        assert!(curp.second_surname_may_be_empty());
        assert_eq!(curp.given_name(), Some("CLAUDIA"));
        assert_eq!(curp.first_surname(), Some(""));
        assert_eq!(curp.second_surname(), Some(""));
    }

    #[test]
    fn from_str_parses() {
        let curp: Curp = "SABC560626MDFLRN01".parse().unwrap();
        assert_eq!(curp.region_name(), "Ciudad de México");
        assert!("SABC560626MDFLRN0".parse::<Curp>().is_err());
    }
}
