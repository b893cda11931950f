use serde::{Deserialize, Serialize};
use std::fmt;

/// Which Game Boy games a save belongs to. Red/Blue and Gold/Silver
/// share a byte layout and cannot be told apart from the save alone,
/// so each pair is one edition tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVersion {
    RedBlue,
    Yellow,
    GoldSilver,
    Crystal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generation {
    I,
    II,
}

impl GameVersion {
    pub fn generation(&self) -> Generation {
        match self {
            Self::RedBlue | Self::Yellow => Generation::I,
            Self::GoldSilver | Self::Crystal => Generation::II,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RedBlue => "Red/Blue",
            Self::Yellow => "Yellow",
            Self::GoldSilver => "Gold/Silver",
            Self::Crystal => "Crystal",
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
