use crate::board::WireBoard;
use crate::config::GameConfig;
use crate::data::{BankError, QuestionBank};
use crate::model::AppState;
use crate::notice::Notices;
use crate::quiz_gate::QuizGate;
use crate::settings::Settings;
use crate::timer::Countdown;

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;
pub mod updates;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{EndpointInfo, TopBarInfo};

/// Controlador de la partida: tablero, quiz, temporizador y overlays.
pub struct WireGameApp {
    pub config: GameConfig,
    pub bank: QuestionBank,
    pub board: WireBoard,
    pub quiz: Option<QuizGate>,
    pub timer: Countdown,
    pub completed: bool,
    pub state: AppState,
    /// Ayuda reabierta a mitad de partida (no pausa el reloj)
    pub help_open: bool,
    pub settings: Settings,
    pub notices: Notices,
    /// Visuals pendientes de aplicar al contexto
    pub visuals_dirty: bool,
    /// Preferencia pendiente de escribir en el storage
    pub settings_dirty: bool,
}

impl WireGameApp {
    /// Arranque desde eframe: carga preferencias y aplica el tema
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, BankError> {
        let settings = cc.storage.map(Settings::load).unwrap_or_default();
        cc.egui_ctx.set_visuals(settings.visuals());

        let app = Self::with_parts(GameConfig::default(), QuestionBank::embedded()?, settings);
        log::info!(
            "wire task listo ({} preguntas, modo oscuro: {})",
            app.bank.len(),
            app.settings.dark_mode
        );
        Ok(app)
    }

    pub fn with_parts(config: GameConfig, bank: QuestionBank, settings: Settings) -> Self {
        Self {
            board: WireBoard::from_config(&config),
            timer: Countdown::new(config.time_limit_secs),
            notices: Notices::new(config.notice_secs),
            quiz: None,
            completed: false,
            state: AppState::Instructions,
            help_open: false,
            visuals_dirty: false,
            settings_dirty: false,
            config,
            bank,
            settings,
        }
    }

    /// Escribe la preferencia de tema si cambió desde el último frame
    pub fn persist_settings(&mut self, storage: &mut dyn eframe::Storage) {
        if !self.settings_dirty {
            return;
        }
        self.settings.save(storage);
        storage.flush();
        self.settings_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameOutcome, PendingConnection, Side, WireColor};
    use crate::notice;
    use crate::settings::DARK_MODE_KEY;
    use crate::settings::tests::MemoryStorage;
    use eframe::Storage;

    fn app() -> WireGameApp {
        let bank = QuestionBank::embedded().expect("banco embebido válido");
        WireGameApp::with_parts(GameConfig::default(), bank, Settings::default())
    }

    fn playing() -> WireGameApp {
        let mut app = app();
        app.dismiss_instructions();
        app
    }

    fn answer(app: &mut WireGameApp, correct: bool) {
        let gate = app.quiz.as_ref().expect("quiz abierto");
        let right = gate.question.correct;
        let index = if correct { right } else { (right + 1) % gate.question.options.len() };
        app.select_quiz_option(index);
        app.submit_quiz();
    }

    fn connect(app: &mut WireGameApp, left: usize, right: usize) {
        assert!(app.handle_connect(left, right).is_some());
        answer(app, true);
    }

    #[test]
    fn starts_on_instructions_with_frozen_timer() {
        let mut app = app();
        assert_eq!(app.state, AppState::Instructions);
        app.advance_time(5.0, 5.0);
        assert_eq!(app.time_left(), 30);
        // El tablero no acepta cables todavía
        assert!(app.handle_connect(0, 4).is_none());
    }

    #[test]
    fn dismissing_instructions_starts_timer() {
        let mut app = playing();
        assert_eq!(app.state, AppState::Playing);
        app.advance_time(1.0, 1.0);
        assert_eq!(app.time_left(), 29);
    }

    #[test]
    fn matching_drop_opens_quiz_for_color() {
        let mut app = playing();
        let pending = app.handle_connect(0, 4).expect("rojo con rojo");
        let gate = app.quiz.as_ref().expect("quiz abierto");
        assert_eq!(gate.pending, pending);
        assert_eq!(gate.question.question, "What color is the impostor's kill animation?");
    }

    #[test]
    fn mismatched_drop_is_silent() {
        let mut app = playing();
        assert!(app.handle_connect(0, 5).is_none());
        assert!(app.quiz.is_none());
        assert!(app.notices.is_empty());
    }

    #[test]
    fn correct_answer_connects_pair() {
        let mut app = playing();
        connect(&mut app, 0, 4);
        assert!(app.quiz.is_none());
        assert!(app.board.is_fully_connected(Side::Left, 0));
        assert!(app.board.is_fully_connected(Side::Right, 4));
        assert!(!app.board.check_completion());
    }

    #[test]
    fn wrong_answer_closes_quiz_and_notifies() {
        let mut app = playing();
        let before = app.board.clone();
        app.handle_connect(1, 5);
        answer(&mut app, false);
        assert!(app.quiz.is_none());
        assert_eq!(app.board, before);
        assert_eq!(app.notices.last_text(), Some(notice::WRONG_ANSWER));
    }

    #[test]
    fn submit_quiz_without_selection_keeps_it_open() {
        let mut app = playing();
        app.handle_connect(2, 7);
        app.submit_quiz();
        assert!(app.quiz.is_some());
    }

    #[test]
    fn cancel_discards_pending() {
        let mut app = playing();
        app.handle_connect(3, 6);
        app.select_quiz_option(2);
        app.cancel_quiz();
        assert!(app.quiz.is_none());
        assert_eq!(app.board.connected_count(), 0);
    }

    #[test]
    fn drops_are_ignored_while_quiz_is_open() {
        let mut app = playing();
        app.handle_connect(0, 4);
        assert!(app.handle_connect(1, 5).is_none());
        assert_eq!(app.quiz.as_ref().map(|g| g.pending.left_id), Some(0));
    }

    #[test]
    fn incomplete_submit_is_rejected() {
        let mut app = playing();
        connect(&mut app, 0, 4);
        app.submit_board();
        assert!(!app.completed);
        assert_eq!(app.state, AppState::Playing);
        assert_eq!(app.notices.last_text(), Some(notice::CONNECT_ALL));
    }

    #[test]
    fn incorrect_wiring_is_reported_on_submit() {
        let mut app = playing();
        connect(&mut app, 0, 4);
        connect(&mut app, 1, 5);
        connect(&mut app, 2, 7);
        connect(&mut app, 3, 6);
        // Estado inconsistente forzado
        app.board.left[2].connected_to = Some(6);
        app.submit_board();
        assert!(!app.completed);
        assert_eq!(app.notices.last_text(), Some(notice::SOME_INCORRECT));
    }

    #[test]
    fn full_board_completes_game() {
        let mut app = playing();
        connect(&mut app, 0, 4);
        connect(&mut app, 1, 5);
        connect(&mut app, 2, 7);
        connect(&mut app, 3, 6);
        assert!(app.board.check_completion());

        app.advance_time(3.0, 3.0);
        app.submit_board();
        assert!(app.completed);
        assert_eq!(app.outcome(), Some(GameOutcome::Completed));
        assert_eq!(app.notices.last_text(), Some(notice::ALL_CORRECT));

        // Reloj congelado
        app.advance_time(10.0, 13.0);
        assert_eq!(app.time_left(), 27);
    }

    #[test]
    fn timeout_ends_game_once() {
        let mut app = playing();
        app.handle_connect(0, 4);
        for second in 1..=30 {
            app.advance_time(1.0, second as f64);
        }
        assert_eq!(app.time_left(), 0);
        assert_eq!(app.outcome(), Some(GameOutcome::TimedOut));
        assert!(app.quiz.is_none());

        app.advance_time(1.0, 31.0);
        assert_eq!(app.time_left(), 0);
        app.submit_board();
        assert!(!app.completed);
    }

    #[test]
    fn reopened_instructions_keep_clock_running() {
        let mut app = playing();
        app.advance_time(2.0, 2.0);
        app.show_instructions();
        assert!(app.help_open);
        assert_eq!(app.state, AppState::Playing);
        assert!(app.handle_connect(0, 4).is_none());

        app.advance_time(5.0, 7.0);
        assert_eq!(app.time_left(), 23);
        app.dismiss_instructions();
        assert!(!app.help_open);
        app.advance_time(1.0, 8.0);
        assert_eq!(app.time_left(), 22);
        assert!(app.handle_connect(0, 4).is_some());
    }

    #[test]
    fn toggling_help_every_frame_cannot_freeze_clock() {
        let mut app = playing();
        let mut now = 0.0;
        for _ in 0..20 {
            now += 0.75;
            app.advance_time(0.75, now);
            app.show_instructions();
            app.advance_time(0.0, now);
            app.dismiss_instructions();
        }
        assert_eq!(app.time_left(), 15);
    }

    #[test]
    fn timeout_closes_reopened_help() {
        let mut app = playing();
        app.show_instructions();
        app.advance_time(30.0, 30.0);
        assert_eq!(app.outcome(), Some(GameOutcome::TimedOut));
        assert!(!app.help_open);
    }

    #[test]
    fn stale_correct_answer_does_not_connect() {
        let mut app = playing();
        connect(&mut app, 1, 5);

        // Conexión pendiente hacia un conector que no existe
        let stale = PendingConnection {
            left_id: 0,
            right_id: 99,
            color: WireColor::Red,
        };
        app.quiz = QuizGate::open(&app.bank, stale);
        app.handle_quiz_answer(true);
        assert!(app.quiz.is_none());
        assert_eq!(app.board.connected_count(), 1);
        assert!(!app.board.is_fully_connected(Side::Left, 0));
    }

    #[test]
    fn dark_mode_toggle_is_persisted_once() {
        let mut app = app();
        let mut storage = MemoryStorage::default();

        app.toggle_dark_mode();
        assert!(app.settings_dirty);
        assert!(app.visuals_dirty);

        app.persist_settings(&mut storage);
        assert!(!app.settings_dirty);
        assert_eq!(storage.get_string(DARK_MODE_KEY).as_deref(), Some("true"));

        // Sin cambios no se vuelve a escribir
        storage.set_string(DARK_MODE_KEY, "false".into());
        app.persist_settings(&mut storage);
        assert_eq!(storage.get_string(DARK_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn reset_restores_session_but_keeps_dark_mode() {
        let mut app = playing();
        app.toggle_dark_mode();
        connect(&mut app, 0, 4);
        app.advance_time(4.0, 4.0);

        app.reset_game();
        assert_eq!(app.state, AppState::Instructions);
        assert_eq!(app.time_left(), 30);
        assert!(!app.completed);
        assert_eq!(app.board, WireBoard::from_config(&app.config));
        assert!(app.settings.dark_mode);

        // El reloj solo vuelve a correr tras cerrar las instrucciones
        app.advance_time(2.0, 6.0);
        assert_eq!(app.time_left(), 30);
    }

    #[test]
    fn endpoint_infos_reflect_links() {
        let mut app = playing();
        connect(&mut app, 1, 5);
        let left = app.endpoint_infos(Side::Left);
        assert!(left[1].fully_connected);
        assert_eq!(left[1].partner, Some(5));
        assert!(!left[1].draggable());
        assert!(left[0].draggable());
        let right = app.endpoint_infos(Side::Right);
        assert!(!right[1].droppable());
        assert!(right[0].droppable());
        assert_eq!(app.top_bar_info().time_label(), "Time: 30s");
    }
}
