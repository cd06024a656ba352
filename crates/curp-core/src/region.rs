//! # Birth Regions
//!
//! The 32 federal entities of Mexico plus `NE` (*nacido en el extranjero*)
//! for people born abroad, keyed by the two-letter code used in positions
//! 11-12 of the CURP. ISO 3166-2 subdivision codes are attached where they
//! exist; foreign-born entries have none.

use serde::Serialize;

/// A birth region as encoded in a CURP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    /// Display name of the federal entity.
    pub name: &'static str,
    /// ISO 3166-2 code, `None` for people born abroad.
    pub iso: Option<&'static str>,
}

impl Region {
    /// Whether this region denotes birth outside Mexico.
    pub fn is_foreign(&self) -> bool {
        self.iso.is_none()
    }
}

const fn mx(name: &'static str, iso: &'static str) -> Region {
    Region {
        name,
        iso: Some(iso),
    }
}

/// Code used for people born abroad.
pub const FOREIGN_BORN: &str = "NE";

/// Every known region, in the order published by the issuing authority.
pub static REGIONS: [(&str, Region); 33] = [
    ("AS", mx("Aguascalientes", "MX-AGU")),
    ("BC", mx("Baja California", "MX-BCN")),
    ("BS", mx("Baja California Sur", "MX-BCS")),
    ("CC", mx("Campeche", "MX-CAM")),
    ("CL", mx("Coahuila de Zaragoza", "MX-COA")),
    ("CM", mx("Colima", "MX-COL")),
    ("CS", mx("Chiapas", "MX-CHP")),
    ("CH", mx("Chihuahua", "MX-CHH")),
    ("DF", mx("Ciudad de México", "MX-CMX")),
    ("DG", mx("Durango", "MX-DUR")),
    ("GT", mx("Guanajuato", "MX-GUA")),
    ("GR", mx("Guerrero", "MX-GRO")),
    ("HG", mx("Hidalgo", "MX-HID")),
    ("JC", mx("Jalisco", "MX-JAL")),
    ("MC", mx("México", "MX-MEX")),
    ("MN", mx("Michoacán de Ocampo", "MX-MIC")),
    ("MS", mx("Morelos", "MX-MOR")),
    ("NT", mx("Nayarit", "MX-NAY")),
    ("NL", mx("Nuevo León", "MX-NLE")),
    ("OC", mx("Oaxaca", "MX-OAX")),
    ("PL", mx("Puebla", "MX-PUE")),
    ("QT", mx("Querétaro", "MX-QUE")),
    ("QR", mx("Quintana Roo", "MX-ROO")),
    ("SP", mx("San Luis Potosí", "MX-SLP")),
    ("SL", mx("Sinaloa", "MX-SIN")),
    ("SR", mx("Sonora", "MX-SON")),
    ("TC", mx("Tabasco", "MX-TAB")),
    ("TS", mx("Tamaulipas", "MX-TAM")),
    ("TL", mx("Tlaxcala", "MX-TLA")),
    ("VZ", mx("Veracruz de Ignacio de la Llave", "MX-VER")),
    ("YN", mx("Yucatán", "MX-YUC")),
    ("ZS", mx("Zacatecas", "MX-ZAC")),
    (
        FOREIGN_BORN,
        Region {
            name: "Extranjero",
            iso: None,
        },
    ),
];

/// Look up a two-letter region code.
pub fn lookup(code: &str) -> Option<&'static Region> {
    REGIONS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, region)| region)
}
