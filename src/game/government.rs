use serde::{Deserialize, Serialize};

/// A president and the chancellor they nominated.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Government {
    pub president: usize,
    pub chancellor: usize,
}

impl Government {
    /// Whether the given player holds either office.
    pub fn includes(&self, player: usize) -> bool {
        self.president == player || self.chancellor == player
    }
}
