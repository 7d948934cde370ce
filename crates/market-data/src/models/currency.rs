use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currencies quoted in NBP table C that this service accepts.
///
/// Deserializes from the upper-case ISO 4217 code, so an unknown code is
/// rejected at the request boundary and never reaches the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "CHF")]
    Chf,
}

impl CurrencyCode {
    /// All accepted currencies.
    pub const ALL: [CurrencyCode; 3] = [CurrencyCode::Eur, CurrencyCode::Usd, CurrencyCode::Chf];

    /// ISO 4217 code in upper case.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Chf => "CHF",
        }
    }

    /// Code as it appears in NBP API paths.
    pub fn path_segment(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the accepted currency codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported currency code: {}", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
