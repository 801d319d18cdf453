//! Door records.

use serde::{Deserialize, Serialize};

/// What stands behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrizeKind {
    #[default]
    Decoy,
    Prize,
}

impl PrizeKind {
    /// Glyph shown when the door is opened.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Decoy => "🐐",
            Self::Prize => "🚗",
        }
    }
}

/// One door of the current trial.
///
/// `revealed` implies `selected`: the host marks the door it opens as taken so
/// that neither the player nor a later reveal can pick it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Door {
    pub prize: PrizeKind,
    pub selected: bool,
    pub revealed: bool,
}

impl Door {
    pub fn is_prize(&self) -> bool {
        self.prize == PrizeKind::Prize
    }

    /// Back to a closed, unselected decoy.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
