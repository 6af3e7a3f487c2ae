use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading life-span characters that hold the age range.
pub const LIFE_SPAN_PREFIX_LEN: usize = 7;

/// One end of a min/max pair.
///
/// Catalog bounds stay textual (`"34"`), store bounds are integers (`34`),
/// and both serialize as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RangeBound {
    Number(i32),
    Text(String),
}

impl From<i32> for RangeBound {
    fn from(value: i32) -> Self {
        RangeBound::Number(value)
    }
}

impl From<&str> for RangeBound {
    fn from(value: &str) -> Self {
        RangeBound::Text(value.to_string())
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Number(n) => write!(f, "{}", n),
            RangeBound::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Min/max pair parsed from a composite `"min-max"` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundPair {
    pub min: Option<RangeBound>,
    pub max: Option<RangeBound>,
}

impl BoundPair {
    pub fn numeric(min: i32, max: i32) -> Self {
        Self {
            min: Some(RangeBound::Number(min)),
            max: Some(RangeBound::Number(max)),
        }
    }

    /// Split on `-`. The first part is the minimum and the second the maximum;
    /// anything past a second hyphen is ignored and a missing part stays `None`.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split('-');
        Self {
            min: parts.next().and_then(clean_part),
            max: parts.next().and_then(clean_part),
        }
    }

    /// Age range from life-span text such as `"10 - 12 years"`. Only the
    /// first seven characters are considered.
    pub fn parse_life_span(raw: &str) -> Self {
        let prefix: String = raw.chars().take(LIFE_SPAN_PREFIX_LEN).collect();
        Self::parse(&prefix)
    }
}

// "3 " -> "3", " 12 y" -> "12", "  " -> None
fn clean_part(part: &str) -> Option<RangeBound> {
    part.split_whitespace().next().map(RangeBound::from)
}
