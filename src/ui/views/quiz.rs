use crate::WireGameApp;
use crate::ui::helpers::two_button_row;
use egui::{Button, Context, Id, Modal, RichText, Vec2};

pub fn ui_quiz(app: &mut WireGameApp, ctx: &Context) {
    let Some(gate) = app.quiz.as_ref() else {
        return;
    };
    let question = gate.question.question.clone();
    let options = gate.question.options.clone();
    let selected = gate.selected;
    let can_submit = gate.can_submit();

    let mut picked = None;
    let mut cancel = false;
    let mut submit = false;

    let modal = Modal::new(Id::new("quiz_modal")).show(ctx, |ui| {
        ui.set_width(420.0);
        ui.label(RichText::new(question.as_str()).heading().strong());
        ui.add_space(18.0);

        for (i, option) in options.iter().enumerate() {
            let btn = Button::new(option.as_str())
                .selected(selected == Some(i))
                .min_size(Vec2::new(ui.available_width(), 44.0));
            if ui.add(btn).clicked() {
                picked = Some(i);
            }
            ui.add_space(6.0);
        }

        ui.add_space(18.0);
        (cancel, submit) = two_button_row(ui, "Cancel", "Submit", can_submit);
    });

    // Clic fuera o Escape: igual que "Cancel"
    if modal.should_close() {
        cancel = true;
    }

    if let Some(i) = picked {
        app.select_quiz_option(i);
    }
    if submit {
        app.submit_quiz();
    } else if cancel {
        app.cancel_quiz();
    }
}
