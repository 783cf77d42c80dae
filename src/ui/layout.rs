use egui::{Align, Color32, Context, Layout, ProgressBar, RichText, Ui, Visuals};

use crate::MathHillApp;
use crate::engine::levels::LEVEL_MAX;

/// Cabecera del juego: volver a la portada, operación y nivel, y reinicio.
pub fn top_panel(app: &mut MathHillApp, ctx: &Context) {
    let Some((name, level)) = app.round.as_ref().map(|r| (r.operation().name(), r.level()))
    else {
        return;
    };

    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("⬅ Home").clicked() {
                app.go_home();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🔄 Reset").clicked() {
                    let now = ctx.input(|i| i.time);
                    app.reset_level(now);
                }
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.strong(name);
                    ui.label(format!("Level {level}"));
                });
            });
        });
    });
}

/// Panel inferior: barra de progreso `nivel / 1000` y botones de tema.
pub fn bottom_panel(app: &MathHillApp, ctx: &Context) {
    let Some(round) = app.round.as_ref() else {
        return;
    };
    let level = round.level();
    let fraction = round.progress();

    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label("Your Progress");
            ui.add(ProgressBar::new(fraction).desired_height(10.0));
            ui.small(format!("{level} / {LEVEL_MAX}"));
        });

        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Barra de cuenta atrás de la ronda (time_left sobre 10) con la etiqueta en segundos.
pub fn countdown_bar(ui: &mut Ui, time_left: u32, total: u32, width: f32) {
    ui.allocate_ui(egui::vec2(width, 24.0), |ui| {
        ui.add(
            ProgressBar::new(time_left as f32 / total as f32)
                .desired_width(width)
                .desired_height(8.0),
        );
    });
    ui.small(format!("{time_left}s"));
}

/// Panel centrado verticalmente con un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Etiqueta grande para los números del problema.
pub fn big_label(ui: &mut Ui, text: String, color: Color32) {
    ui.label(RichText::new(text).size(64.0).strong().color(color));
}
