//! Floor - The five fixed library floors
//!
//! Every document in the library lives on exactly one floor:
//!
//! | # | Name       | Directory             |
//! |---|------------|-----------------------|
//! | 1 | Foundation | `Floor_01_Foundation` |
//! | 2 | Systems    | `Floor_02_Systems`    |
//! | 3 | Networks   | `Floor_03_Networks`   |
//! | 4 | Action     | `Floor_04_Action`     |
//! | 5 | Vision     | `Floor_05_Vision`     |

use serde::{Deserialize, Serialize};

/// Library floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Floor {
    Foundation,
    Systems,
    Networks,
    Action,
    Vision,
}

impl Floor {
    /// All floors, bottom to top
    pub fn all() -> [Floor; 5] {
        [
            Floor::Foundation,
            Floor::Systems,
            Floor::Networks,
            Floor::Action,
            Floor::Vision,
        ]
    }

    /// Floor for a number, if it is in 1..=5
    pub fn from_number(number: i64) -> Option<Floor> {
        match number {
            1 => Some(Floor::Foundation),
            2 => Some(Floor::Systems),
            3 => Some(Floor::Networks),
            4 => Some(Floor::Action),
            5 => Some(Floor::Vision),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Floor::Foundation => 1,
            Floor::Systems => 2,
            Floor::Networks => 3,
            Floor::Action => 4,
            Floor::Vision => 5,
        }
    }

    /// Short name
    pub fn name(self) -> &'static str {
        match self {
            Floor::Foundation => "Foundation",
            Floor::Systems => "Systems",
            Floor::Networks => "Networks",
            Floor::Action => "Action",
            Floor::Vision => "Vision",
        }
    }

    /// Long description
    pub fn title(self) -> &'static str {
        match self {
            Floor::Foundation => "Foundation & Navigation",
            Floor::Systems => "Frameworks & Understanding",
            Floor::Networks => "Networks & Relationships",
            Floor::Action => "Action & Implementation",
            Floor::Vision => "Vision & Meaning",
        }
    }

    /// Directory under the memory root
    pub fn directory(self) -> &'static str {
        match self {
            Floor::Foundation => "Floor_01_Foundation",
            Floor::Systems => "Floor_02_Systems",
            Floor::Networks => "Floor_03_Networks",
            Floor::Action => "Floor_04_Action",
            Floor::Vision => "Floor_05_Vision",
        }
    }
}

/// Floor name for a number, "Unknown" outside 1..=5
pub fn floor_name(number: i64) -> &'static str {
    Floor::from_number(number).map_or("Unknown", Floor::name)
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Floor {
    type Err = anyhow::Error;

    /// Accepts a number ("3") or a name ("networks")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.trim().parse::<i64>() {
            return Floor::from_number(n)
                .ok_or_else(|| anyhow::anyhow!("Invalid floor number: {}. Use 1-5.", n));
        }
        Floor::all()
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown floor: {}", s))
    }
}
