use super::*;

impl WireGameApp {
    /// "Play Again": tablero nuevo, reloj a cero y vuelta a las instrucciones.
    /// El modo oscuro no se toca.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.timer.reset();
        self.quiz = None;
        self.completed = false;
        self.notices.clear();
        self.help_open = false;
        self.state = AppState::Instructions;
        log::info!("partida reiniciada");
    }

    /// "Got it!": la primera vez arranca el temporizador; si solo era la ayuda, la cierra
    pub fn dismiss_instructions(&mut self) {
        if self.help_open {
            self.help_open = false;
            return;
        }
        if self.state != AppState::Instructions {
            return;
        }
        self.state = AppState::Playing;
        self.timer.start();
    }

    /// Botón "How to Play" de la barra superior. Solo muestra la ayuda: el reloj sigue corriendo.
    pub fn show_instructions(&mut self) {
        if self.state != AppState::Playing {
            return;
        }
        self.help_open = true;
    }
}
