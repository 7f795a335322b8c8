use crate::WireGameApp;
use crate::notice::NoticeKind;
use egui::{Align, Align2, Area, Color32, Context, Frame, Id, Layout, Order, RichText};

pub fn top_panel(app: &mut WireGameApp, ctx: &Context) {
    let info = app.top_bar_info();
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("How to Play").clicked() {
                app.show_instructions();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(info.theme_icon()).clicked() {
                    app.toggle_dark_mode();
                    ctx.request_repaint();
                }
                ui.add_space(16.0);
                ui.label(RichText::new(info.time_label()).strong().size(20.0));
            });
        });
    });
}

/// Avisos arriba al centro, encima de todo (incluidos los modales)
pub fn notices_area(app: &WireGameApp, ctx: &Context) {
    if app.notices.is_empty() {
        return;
    }
    Area::new(Id::new("notices"))
        .anchor(Align2::CENTER_TOP, [0.0, 48.0])
        .order(Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            for notice in app.notices.iter() {
                let (icon, color) = match notice.kind {
                    NoticeKind::Success => ("✔", Color32::from_rgb(34, 197, 94)),
                    NoticeKind::Error => ("✖", Color32::from_rgb(239, 68, 68)),
                };
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(color, icon);
                        ui.label(&notice.text);
                    });
                });
                ui.add_space(4.0);
            }
        });
}
