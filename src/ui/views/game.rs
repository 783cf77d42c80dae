use egui::{Context, Key, RichText, TextEdit};

use crate::MathHillApp;
use crate::model::RoundState;
use crate::ui::helpers::operation_color;
use crate::ui::layout::{big_label, bottom_panel, centered_panel, countdown_bar, top_panel};

use crate::engine::round::COUNTDOWN_SECONDS;

/// Pantalla de juego: cuenta atrás, problema y campo de respuesta, o el
/// feedback de la ronda según el estado.
pub fn ui_game(app: &mut MathHillApp, ctx: &Context) {
    top_panel(app, ctx);
    bottom_panel(app, ctx);

    // Copia de los datos de la ronda antes de tocar el buffer de entrada
    let Some((state, problem, time_left, operation)) = app
        .round
        .as_ref()
        .map(|r| (r.state(), *r.problem(), r.time_left(), r.operation()))
    else {
        app.go_home();
        return;
    };
    let color = operation_color(operation);

    centered_panel(ctx, 480.0, 560.0, |ui| {
        ui.vertical_centered(|ui| match state {
            RoundState::Playing => {
                countdown_bar(ui, time_left, COUNTDOWN_SECONDS, 260.0);
                ui.add_space(16.0);

                big_label(ui, problem.operand1.to_string(), color);
                big_label(ui, format!("{} {}", problem.symbol, problem.operand2), color);
                ui.separator();
                ui.add_space(8.0);

                let response = ui.add(
                    TextEdit::singleline(&mut app.input)
                        .hint_text("?")
                        .desired_width(180.0)
                        .font(egui::TextStyle::Heading)
                        .horizontal_align(egui::Align::Center),
                );
                if response.changed() {
                    // solo cifras: lo demás no cuenta como respuesta
                    app.input.retain(|c| c.is_ascii_digit());
                }
                if app.focus_input {
                    response.request_focus();
                    app.focus_input = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    let now = ctx.input(|i| i.time);
                    app.submit(now);
                }
            }
            RoundState::Correct => {
                ui.label(RichText::new("🎉").size(72.0));
                ui.add_space(8.0);
                ui.heading("Excellent! +1 Level");
            }
            RoundState::Wrong => {
                ui.label(RichText::new("❌").size(56.0));
                ui.add_space(8.0);
                ui.heading(format!("Correct answer: {}", problem.answer));
                ui.label("Try again! -5 Levels");
            }
            RoundState::Timeout => {
                ui.label(RichText::new("⏰").size(56.0));
                ui.add_space(8.0);
                ui.heading(format!("Correct answer: {}", problem.answer));
                ui.label("Time's up! -5 Levels");
            }
        });
    });
}
