use super::*;
use crate::model::{GameOutcome, PendingConnection};
use crate::notice;

impl WireGameApp {
    /// Solo se puede jugar con las instrucciones cerradas y sin quiz abierto
    pub fn accepts_input(&self) -> bool {
        self.state == AppState::Playing && self.quiz.is_none() && !self.help_open
    }

    /// Soltar un cable izquierdo sobre un conector derecho.
    /// Si los colores coinciden se abre el quiz; si no, no pasa nada.
    pub fn handle_connect(&mut self, left_id: usize, right_id: usize) -> Option<PendingConnection> {
        if !self.accepts_input() {
            return None;
        }

        match self.board.propose_connection(left_id, right_id) {
            Ok(pending) => {
                self.quiz = QuizGate::open(&self.bank, pending);
                if self.quiz.is_none() {
                    log::warn!("sin pregunta para el color {}", pending.color);
                    return None;
                }
                log::debug!("quiz abierto para {left_id}→{right_id} ({})", pending.color);
                Some(pending)
            }
            Err(rejection) => {
                // Rechazo silencioso: el jugador no recibe aviso
                log::debug!("conexión {left_id}→{right_id} rechazada: {rejection}");
                None
            }
        }
    }

    pub fn select_quiz_option(&mut self, index: usize) {
        if let Some(gate) = self.quiz.as_mut() {
            gate.select_option(index);
        }
    }

    /// Botón "Submit" del quiz. Sin opción elegida no hace nada.
    pub fn submit_quiz(&mut self) {
        let Some(correct) = self.quiz.as_mut().and_then(QuizGate::submit) else {
            return;
        };
        if !correct {
            self.notices.error(notice::WRONG_ANSWER);
        }
        self.handle_quiz_answer(correct);
    }

    /// Resuelve la conexión pendiente y cierra el quiz en ambos casos
    pub fn handle_quiz_answer(&mut self, correct: bool) {
        let Some(gate) = self.quiz.take() else {
            return;
        };
        let pending = gate.pending;
        if !correct {
            log::debug!("respuesta incorrecta para {}", pending.color);
            return;
        }
        if self.board.resolve_connection(pending, true) {
            log::info!(
                "cable {} conectado ({}/{})",
                pending.color,
                self.board.connected_count(),
                self.board.left().len()
            );
        } else {
            log::debug!("respuesta correcta descartada para {}", pending.color);
        }
    }

    /// "Cancel" o clic fuera del quiz: se descarta la conexión pendiente
    pub fn cancel_quiz(&mut self) {
        if let Some(gate) = self.quiz.take() {
            log::debug!("quiz cancelado para {}", gate.pending.color);
        }
    }

    /// Botón "Submit" del tablero
    pub fn submit_board(&mut self) {
        if self.state != AppState::Playing || self.completed {
            return;
        }
        if !self.board.all_connected() {
            self.notices.error(notice::CONNECT_ALL);
            return;
        }

        if self.board.check_completion() {
            self.completed = true;
            self.timer.stop();
            self.quiz = None;
            self.help_open = false;
            self.state = AppState::GameOver(GameOutcome::Completed);
            self.notices.success(notice::ALL_CORRECT);
            log::info!("tarea completada con {}s restantes", self.timer.remaining());
        } else {
            self.notices.error(notice::SOME_INCORRECT);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        let dark = self.settings.toggle_dark_mode();
        self.visuals_dirty = true;
        self.settings_dirty = true;
        log::debug!("modo oscuro: {dark}");
    }
}
