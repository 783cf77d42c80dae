use egui::{Button, Context, RichText};

use crate::MathHillApp;
use crate::model::Operation;
use crate::ui::helpers::operation_color;
use crate::ui::layout::centered_panel;

/// Portada: título y la rejilla de las cuatro operaciones.
pub fn ui_home(app: &mut MathHillApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Math Hill").size(56.0).strong());
            ui.add_space(8.0);
            ui.label("Climb the mathematical mountain one problem at a time!");
            ui.add_space(24.0);

            let card = egui::vec2(120.0, 120.0);
            let mut chosen: Option<Operation> = None;
            for row in Operation::ALL.chunks(2) {
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - card.x * 2.0 - 8.0).max(0.0) / 2.0);
                    for &op in row {
                        let label = RichText::new(format!("{}\n{}", op.symbol(), op.name()))
                            .size(28.0)
                            .strong()
                            .color(egui::Color32::WHITE);
                        let button = Button::new(label).fill(operation_color(op));
                        if ui.add_sized(card, button).clicked() {
                            chosen = Some(op);
                        }
                    }
                });
                ui.add_space(8.0);
            }
            if let Some(op) = chosen {
                let now = ctx.input(|i| i.time);
                app.start_game(op, now);
            }

            ui.add_space(12.0);
            ui.small("Choose an operation to start your math adventure!");
        });
    });
}
