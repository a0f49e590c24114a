use crate::game_state::GamePhase;
use crate::types::{DEFAULT_BOARD_SIZE, MAX_CELLS};

/// Copyable view of a game for hosts and renderers.
///
/// `cells` is row-major with a stride of `size`; `0` means empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: u8,
    pub cells: [u32; MAX_CELLS],
    pub score: u64,
    /// Best score known to the host (the engine leaves this at 0).
    pub best: u64,
    pub won: bool,
    pub lost: bool,
    pub phase: GamePhase,
    pub moves: u32,
    pub episode_id: u32,
    pub max_tile: u32,
    pub win_value: u32,
}

impl GameSnapshot {
    /// Tile value at (row, col), `0` when empty or out of bounds
    pub fn value(&self, row: usize, col: usize) -> u32 {
        let n = self.size as usize;
        if row >= n || col >= n {
            return 0;
        }
        self.cells[row * n + col]
    }

    pub fn playable(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Won)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: [0; MAX_CELLS],
            score: 0,
            best: 0,
            won: false,
            lost: false,
            phase: GamePhase::NotStarted,
            moves: 0,
            episode_id: 0,
            max_tile: 0,
            win_value: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_an_empty_unstarted_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.size, DEFAULT_BOARD_SIZE);
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert!(snap.cells.iter().all(|&v| v == 0));
        assert!(!snap.playable());
    }

    #[test]
    fn value_uses_size_as_stride() {
        let mut snap = GameSnapshot {
            size: 3,
            phase: GamePhase::Won,
            ..GameSnapshot::default()
        };
        snap.cells[4] = 8;
        assert_eq!(snap.value(1, 1), 8);
        assert_eq!(snap.value(0, 3), 0);
        assert!(snap.playable());
    }
}
