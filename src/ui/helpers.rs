// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);

/// Botón ancho con relleno de color (los azules "Got it!" / "Play Again")
pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, fill: Color32) -> bool {
    let text = RichText::new(label).color(Color32::WHITE).strong();
    ui.add(Button::new(text).fill(fill).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila, alineados a la derecha.
/// El derecho puede estar deshabilitado. Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    left_label: &str,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn = Vec2::new(96.0, 36.0);
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        // right_to_left: el primero que se añade queda a la derecha
        clicked_right = ui
            .add_enabled(right_enabled, Button::new(right_label).min_size(btn))
            .clicked();
        clicked_left = ui.add(Button::new(left_label).min_size(btn)).clicked();
    });
    (clicked_left, clicked_right)
}
