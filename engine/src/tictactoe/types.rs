use super::board::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Human,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }
}

/// A board square. Unclaimed squares carry their 1-based label so a
/// renderer can show the number the player has to type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty(u8),
    Human,
    Computer,
}

impl Cell {
    pub fn empty_at(pos: Position) -> Self {
        Cell::Empty(pos.label())
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Empty(_))
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty(_) => None,
            Cell::Human => Some(Mark::Human),
            Cell::Computer => Some(Mark::Computer),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Human => Cell::Human,
            Mark::Computer => Cell::Computer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a 1..=9 keypad index onto the grid, row-major.
    pub fn from_index(index: usize) -> Option<Self> {
        if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&index) {
            return None;
        }
        let zero_based = index - 1;
        Some(Self::new(zero_based / BOARD_SIZE, zero_based % BOARD_SIZE))
    }

    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col + 1
    }

    pub fn label(&self) -> u8 {
        self.index() as u8
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    HumanWin,
    ComputerWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    /// Search score of a finished game from the computer's point of view.
    pub fn score(&self) -> Option<i32> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::ComputerWin => Some(1),
            GameOutcome::HumanWin => Some(-1),
            GameOutcome::Draw => Some(0),
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::HumanWin => Some(Mark::Human),
            GameOutcome::ComputerWin => Some(Mark::Computer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_maps_row_major() {
        assert_eq!(Position::from_index(1), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(5), Some(Position::new(1, 1)));
        assert_eq!(Position::from_index(6), Some(Position::new(1, 2)));
        assert_eq!(Position::from_index(9), Some(Position::new(2, 2)));
        assert_eq!(Position::new(2, 0).index(), 7);
    }

    #[test]
    fn test_index_outside_keypad_is_rejected() {
        assert_eq!(Position::from_index(0), None);
        assert_eq!(Position::from_index(10), None);
    }

    #[test]
    fn test_cell_marks() {
        assert_eq!(Cell::empty_at(Position::new(2, 1)), Cell::Empty(8));
        assert!(Cell::Empty(3).is_free());
        assert!(!Cell::from(Mark::Human).is_free());
        assert_eq!(Cell::Computer.mark(), Some(Mark::Computer));
        assert_eq!(Cell::Empty(1).mark(), None);
        assert_eq!(Mark::Human.opponent(), Mark::Computer);
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(GameOutcome::ComputerWin.score(), Some(1));
        assert_eq!(GameOutcome::HumanWin.score(), Some(-1));
        assert_eq!(GameOutcome::Draw.score(), Some(0));
        assert_eq!(GameOutcome::InProgress.score(), None);
        assert!(!GameOutcome::InProgress.is_terminal());
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
