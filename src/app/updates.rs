use super::*;
use crate::model::GameOutcome;
use crate::timer::TimerEvent;

impl WireGameApp {
    /// Avanza el reloj con el tiempo del frame. Llamado una vez por `update`.
    pub fn advance_time(&mut self, frame_dt: f32, now: f64) {
        self.notices.update(now);

        if self.state != AppState::Playing || self.completed {
            return;
        }
        if self.timer.advance(frame_dt) == TimerEvent::Expired {
            self.on_timeout();
        }
    }

    fn on_timeout(&mut self) {
        self.quiz = None;
        self.help_open = false;
        self.state = AppState::GameOver(GameOutcome::TimedOut);
        log::info!(
            "se acabó el tiempo con {}/{} cables conectados",
            self.board.connected_count(),
            self.board.left().len()
        );
    }
}
