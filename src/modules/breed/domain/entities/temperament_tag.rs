use serde::{Deserialize, Serialize};

/// A named temperament row related to a stored breed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperamentTag {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl TemperamentTag {
    /// Tag names joined for display, e.g. `"Friendly, Curious"`.
    pub fn join_names(tags: &[TemperamentTag]) -> String {
        tags.iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for TemperamentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
