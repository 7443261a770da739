use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_engine::tictactoe::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerSetting {
    #[default]
    Ask,
    Human,
    Computer,
    Random,
}

impl FirstPlayerSetting {
    /// `None` means the player has to be asked.
    pub fn resolve(&self) -> Option<Mark> {
        match self {
            FirstPlayerSetting::Ask => None,
            FirstPlayerSetting::Human => Some(Mark::Human),
            FirstPlayerSetting::Computer => Some(Mark::Computer),
            FirstPlayerSetting::Random => {
                if rand::rng().random_bool(0.5) {
                    Some(Mark::Human)
                } else {
                    Some(Mark::Computer)
                }
            }
        }
    }
}
