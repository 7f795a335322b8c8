use crate::WireGameApp;
use crate::model::GameOutcome;
use crate::ui::helpers::{BLUE, big_button};
use crate::view_models::game_over_texts;
use egui::{Context, Id, Modal, RichText};

pub fn ui_game_over(app: &mut WireGameApp, ctx: &Context, outcome: GameOutcome) {
    let (title, body) = game_over_texts(outcome);
    let mut play_again = false;

    Modal::new(Id::new("game_over_modal")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(title).heading().strong());
            ui.add_space(12.0);
            ui.label(body);
            ui.add_space(18.0);
            play_again = big_button(ui, "Play Again", 160.0, 36.0, BLUE);
        });
    });

    if play_again {
        app.reset_game();
    }
}
