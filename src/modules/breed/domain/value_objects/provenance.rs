use serde::{Deserialize, Serialize};
use std::fmt;

/// Which source produced a normalized breed record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Local record store
    #[serde(rename = "DB")]
    Store,
    /// Remote breed catalog
    #[serde(rename = "API")]
    Catalog,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Store => "DB",
            Provenance::Catalog => "API",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
