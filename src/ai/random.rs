use rand::{rngs::ThreadRng, Rng};

use crate::{
    config::BOARD_WIDTH,
    game::{Board, Column, GameResult, MoveSource, Player},
};

/// Computer opponent picking any column with equal chance.
///
/// It does not look at the board, so it will happily propose a full column.
/// The turn controller rejects such a proposal and asks again.
#[derive(Debug, Clone)]
pub struct RandomAgent<R = ThreadRng> {
    rng: R,
}

impl RandomAgent<ThreadRng> {
    /// Create an agent backed by the thread local generator.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomAgent<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    /// Create an agent drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a column index in `0..BOARD_WIDTH`, ignoring how full it is.
    pub fn choose_move(&mut self, _board: &Board) -> usize {
        self.rng.gen_range(0..BOARD_WIDTH)
    }
}

impl<R: Rng> MoveSource for RandomAgent<R> {
    fn next_move(&mut self, board: &Board, player: Player) -> GameResult<Column> {
        let col = self.choose_move(board);
        log::debug!("AI ({player}): proposing column index {col}");
        Column::from_index(col)
    }
}
