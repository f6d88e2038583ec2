use ansi_term::Colour;
use serde::{Deserialize, Serialize};

/// Closed set of sites the company operates at.
/// The serialized labels match the values persisted in the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Marina,
    Boulevard,
    Ama,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Marina, Location::Boulevard, Location::Ama];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Marina => "Marina",
            Location::Boulevard => "Boulevard",
            Location::Ama => "Ama",
        }
    }

    /// Convert stored label → enum
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Marina" => Some(Location::Marina),
            "Boulevard" => Some(Location::Boulevard),
            "Ama" => Some(Location::Ama),
            _ => None,
        }
    }

    /// Helper: convert CLI input (any casing)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "marina" => Some(Location::Marina),
            "boulevard" => Some(Location::Boulevard),
            "ama" => Some(Location::Ama),
            _ => None,
        }
    }

    /// Calendar legend color, one per site.
    pub fn colour(&self) -> Colour {
        match self {
            Location::Marina => Colour::Blue,
            Location::Boulevard => Colour::Purple,
            Location::Ama => Colour::Green,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
