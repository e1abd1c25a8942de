use serde::{Deserialize, Serialize};

/// A commune as returned by the geocoding API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commune {
    /// INSEE code, unique within one result set
    #[serde(rename = "code")]
    pub insee_code: String,
    #[serde(rename = "nom")]
    pub name: String,
    /// Raw department code, "2A"/"2B" for Corsica
    #[serde(rename = "codeDepartement")]
    pub department_code: String,
    /// Postal codes in source order
    #[serde(rename = "codesPostaux", default)]
    pub postal_codes: Vec<String>,
    /// Some communes come back without a population figure
    #[serde(default)]
    pub population: u64,
}

impl Commune {
    /// Department codes of `communes`, in order, without duplicates.
    pub fn department_codes<'a, I>(communes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Commune>,
    {
        let mut codes: Vec<String> = Vec::new();
        for commune in communes {
            if !codes.contains(&commune.department_code) {
                codes.push(commune.department_code.clone());
            }
        }
        codes
    }
}
