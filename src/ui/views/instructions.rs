use crate::WireGameApp;
use crate::ui::helpers::{BLUE, big_button};
use egui::{Color32, Context, Id, Modal, RichText, Ui};

const SECTIONS: [(&str, Color32, &[&str]); 3] = [
    (
        "Game Objective",
        Color32::from_rgb(96, 165, 250),
        &["Connect matching colored wires from left to right to complete the electrical circuit."],
    ),
    (
        "Controls",
        Color32::from_rgb(74, 222, 128),
        &[
            "Click and drag wires from the left side",
            "Drop them onto matching colored endpoints on the right",
            "Answer the Among Us themed questions correctly to connect wires",
        ],
    ),
    (
        "Tips",
        Color32::from_rgb(250, 204, 21),
        &[
            "Match the colors exactly",
            "Some wires will connect straight, others at an angle",
            "All wires must be connected to complete the task",
            "Wrong answers will prevent the wire from connecting",
        ],
    ),
];

pub fn ui_instructions(app: &mut WireGameApp, ctx: &Context) {
    let limit = app.config.time_limit_secs;
    let mut got_it = false;

    Modal::new(Id::new("instructions_modal")).show(ctx, |ui| {
        ui.set_width(420.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("How to Play").heading().strong());
        });
        ui.add_space(12.0);
        ui.label(format!(
            "Connect matching colored wires from left to right. Drag from one connector to another. \
             You have {limit} seconds to complete the task!"
        ));
        ui.add_space(12.0);

        for (title, color, lines) in SECTIONS {
            section(ui, title, color, lines);
        }

        ui.add_space(16.0);
        let width = ui.available_width();
        got_it = big_button(ui, "Got it!", width, 40.0, BLUE);
    });

    // Sin cierre por clic fuera: el reloj arranca solo con "Got it!"
    if got_it {
        app.dismiss_instructions();
    }
}

fn section(ui: &mut Ui, title: &str, color: Color32, lines: &[&str]) {
    ui.label(RichText::new(title).color(color).strong().size(17.0));
    for line in lines {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(*line);
        });
    }
    ui.add_space(8.0);
}
