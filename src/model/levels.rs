use serde::{Deserialize, Serialize};

/// Alert severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    #[serde(rename = "Vert")]
    Green,
    #[serde(rename = "Jaune")]
    Yellow,
    #[serde(rename = "Orange")]
    Orange,
    #[serde(rename = "Rouge")]
    Red,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Green => "Vert",
            AlertLevel::Yellow => "Jaune",
            AlertLevel::Orange => "Orange",
            AlertLevel::Red => "Rouge",
        }
    }

    /// RGBA fill used by the map layer.
    pub fn color(&self) -> [u8; 4] {
        match self {
            AlertLevel::Green => [0, 200, 0, 160],
            AlertLevel::Yellow => [255, 255, 0, 160],
            AlertLevel::Orange => [255, 165, 0, 160],
            AlertLevel::Red => [255, 0, 0, 160],
        }
    }

    /// Orange and Red are reported; Green and Yellow are not.
    pub fn is_alert(&self) -> bool {
        *self >= AlertLevel::Orange
    }

    pub fn lowest() -> AlertLevel {
        AlertLevel::Green
    }

    pub fn ordered() -> &'static [AlertLevel] {
        &[
            AlertLevel::Green,
            AlertLevel::Yellow,
            AlertLevel::Orange,
            AlertLevel::Red,
        ]
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/levels.rs"]
mod tests;
