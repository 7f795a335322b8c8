use super::*;
use crate::model::GameOutcome;

impl WireGameApp {
    pub fn time_left(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            AppState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// ¿Aceptaría este conector derecho el cable `left_id`? (para resaltar el destino)
    pub fn can_drop(&self, left_id: usize, right_id: usize) -> bool {
        self.accepts_input() && self.board.propose_connection(left_id, right_id).is_ok()
    }
}
