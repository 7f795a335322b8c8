use crate::WireGameApp;
use crate::model::Side;
use crate::ui::helpers::{GREEN, big_button};
use crate::view_models::EndpointInfo;
use egui::{
    CentralPanel, Color32, Context, CursorIcon, DragAndDrop, Id, Painter, Pos2, Rect, RichText,
    Sense, Stroke, StrokeKind, Ui, Vec2, vec2,
};

pub const BOARD_SIZE: f32 = 400.0;
const BORDER: f32 = 10.0;
const RADIUS: f32 = 20.0;
const WIRE_WIDTH: f32 = 10.0;

/// Carga del arrastre. Se fija al empezar a arrastrar un cable izquierdo
/// y se recoge al soltar sobre un conector derecho.
#[derive(Clone, Copy, Debug)]
pub struct WirePayload {
    pub left_id: usize,
}

pub fn ui_board(app: &mut WireGameApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        // Centrar verticalmente
        let estimated_h = BOARD_SIZE + 140.0;
        let extra = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(extra);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Among Us Wire Task").size(32.0).strong());
            ui.add_space(18.0);
            board_area(app, ui);
            ui.add_space(18.0);
            if big_button(ui, "Submit", 160.0, 40.0, GREEN) {
                app.submit_board();
            }
        });
    });
}

fn column_centers(area: Rect, x: f32, count: usize) -> Vec<Pos2> {
    if count == 0 {
        return Vec::new();
    }
    let step = area.height() / count as f32;
    (0..count)
        .map(|i| Pos2::new(x, area.top() + step * (i as f32 + 0.5)))
        .collect()
}

fn board_area(app: &mut WireGameApp, ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(BOARD_SIZE), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect(
        rect,
        8.0,
        ui.visuals().extreme_bg_color,
        Stroke::new(BORDER, Color32::from_rgba_unmultiplied(128, 128, 128, 51)),
        StrokeKind::Inside,
    );

    let inner = rect.shrink2(vec2(32.0 + BORDER, 24.0 + BORDER));
    let left = app.endpoint_infos(Side::Left);
    let right = app.endpoint_infos(Side::Right);
    let left_pos = column_centers(inner, inner.left() + RADIUS, left.len());
    let right_pos = column_centers(inner, inner.right() - RADIUS, right.len());
    let right_center = |id: usize| {
        right
            .iter()
            .zip(&right_pos)
            .find(|(w, _)| w.id == id)
            .map(|(_, p)| *p)
    };

    // Cables tendidos: solo si las dos puntas están confirmadas
    for (wire, &pos) in left.iter().zip(&left_pos) {
        if !wire.fully_connected {
            continue;
        }
        if let Some(end) = wire.partner.and_then(&right_center) {
            painter.line_segment([pos, end], Stroke::new(WIRE_WIDTH, wire.color.rgb()));
        }
    }

    let input_ok = app.accepts_input();
    let dragged_left = DragAndDrop::payload::<WirePayload>(ui.ctx()).map(|p| p.left_id);
    let mut dropped = None;

    // Columna izquierda: origen del arrastre
    for (wire, &pos) in left.iter().zip(&left_pos) {
        let can_drag = input_ok && wire.draggable();
        let sense = if can_drag { Sense::drag() } else { Sense::hover() };
        let hit = Rect::from_center_size(pos, Vec2::splat(RADIUS * 2.0));
        let resp = ui.interact(hit, Id::new(("wire", wire.id)), sense);

        let dragging = can_drag && resp.dragged();
        if dragging {
            resp.dnd_set_drag_payload(WirePayload { left_id: wire.id });
            if let Some(pointer) = ui.ctx().pointer_interact_pos() {
                ui.painter().line_segment(
                    [pos, pointer],
                    Stroke::new(WIRE_WIDTH, wire.color.rgb().gamma_multiply(0.7)),
                );
            }
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if can_drag && resp.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        let scale = if dragging || (can_drag && resp.hovered()) { 1.1 } else { 1.0 };
        let opacity = if dragging { 0.7 } else { 1.0 };
        draw_endpoint(&painter, pos, wire, scale, opacity);
    }

    // Columna derecha: destino del drop
    for (wire, &pos) in right.iter().zip(&right_pos) {
        let hit = Rect::from_center_size(pos, Vec2::splat(RADIUS * 2.0));
        let resp = ui.interact(hit, Id::new(("wire", wire.id)), Sense::hover());

        let can_accept = dragged_left
            .is_some_and(|l| wire.droppable() && resp.contains_pointer() && app.can_drop(l, wire.id));
        if can_accept {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        if let Some(payload) = resp.dnd_release_payload::<WirePayload>() {
            if wire.droppable() {
                dropped = Some((payload.left_id, wire.id));
            }
        }

        let scale = if can_accept { 1.25 } else { 1.0 };
        draw_endpoint(&painter, pos, wire, scale, 1.0);
    }

    if let Some((left_id, right_id)) = dropped {
        app.handle_connect(left_id, right_id);
    }
}

fn draw_endpoint(painter: &Painter, center: Pos2, wire: &EndpointInfo, scale: f32, opacity: f32) {
    let r = RADIUS * scale;
    painter.circle_filled(center, r, wire.color.rgb().gamma_multiply(opacity));
    if wire.connected {
        // Anillo verde exterior + anillo blanco interior
        painter.circle_stroke(center, r + 4.0, Stroke::new(2.0, Color32::GREEN));
        painter.circle_stroke(center, 12.0, Stroke::new(2.0, Color32::WHITE));
    }
}
