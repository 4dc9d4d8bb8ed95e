use serde::{Deserialize, Serialize};

/// The two political parties of the game, which double as the two types of policy card.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum Party {
    Liberal,
    Fascist,
}

impl ToString for Party {
    fn to_string(&self) -> String {
        match self {
            Party::Liberal => "Liberal",
            Party::Fascist => "Fascist",
        }
        .to_string()
    }
}
