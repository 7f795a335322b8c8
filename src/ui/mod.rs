mod helpers;
pub mod layout;
pub mod views;

use crate::app::WireGameApp;
use crate::model::AppState;
use eframe::{App, Frame, Storage};
use egui::Context;
use layout::{notices_area, top_panel};
use std::time::Duration;

const REPAINT_EVERY: Duration = Duration::from_millis(200);

impl App for WireGameApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let (dt, now) = ctx.input(|i| (i.unstable_dt, i.time));
        self.advance_time(dt, now);

        // Tema y preferencia se aplican en cuanto cambian
        if self.visuals_dirty {
            ctx.set_visuals(self.settings.visuals());
            self.visuals_dirty = false;
        }
        if let Some(storage) = frame.storage_mut() {
            self.persist_settings(storage);
        }

        // BARRA SUPERIOR: instrucciones, tiempo y tema
        top_panel(self, ctx);

        // El tablero siempre se dibuja; los overlays van encima
        views::board::ui_board(self, ctx);

        match self.state {
            AppState::Instructions => views::instructions::ui_instructions(self, ctx),
            AppState::Playing => {
                if self.help_open {
                    views::instructions::ui_instructions(self, ctx);
                } else if self.quiz.is_some() {
                    views::quiz::ui_quiz(self, ctx);
                }
            }
            AppState::GameOver(outcome) => views::game_over::ui_game_over(self, ctx, outcome),
        }

        notices_area(self, ctx);

        if self.timer.is_running() || !self.notices.is_empty() {
            ctx.request_repaint_after(REPAINT_EVERY);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.settings.save(storage);
    }
}
