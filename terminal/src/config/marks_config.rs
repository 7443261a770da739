use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::Cell;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MarksConfig {
    pub human: char,
    pub computer: char,
}

impl MarksConfig {
    pub fn symbol(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty(label) => label.to_string(),
            Cell::Human => self.human.to_string(),
            Cell::Computer => self.computer.to_string(),
        }
    }
}

impl Validate for MarksConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human == self.computer {
            return Err("human and computer marks must differ".to_string());
        }
        for mark in [self.human, self.computer] {
            if mark.is_ascii_digit() || mark.is_whitespace() || mark.is_control() {
                return Err(format!("'{}' cannot be used as a mark", mark.escape_default()));
            }
        }
        Ok(())
    }
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self {
            human: 'O',
            computer: 'X',
        }
    }
}
