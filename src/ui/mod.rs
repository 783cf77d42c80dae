mod helpers;
pub mod layout;
pub mod views;

use crate::app::MathHillApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;

impl App for MathHillApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Los temporizadores del motor avanzan con el reloj de frames
        let now = ctx.input(|i| i.time);
        self.tick(now);

        // Dispatch por estado a las funciones en views
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Game => views::game::ui_game(self, ctx),
        }

        // Sin eventos de entrada egui no repinta solo; pide un frame antes
        // del próximo vencimiento para que los ticks disparen a tiempo.
        if let Some(due) = self.round.as_ref().and_then(|r| r.next_deadline()) {
            let wait = (due - now).max(0.0).min(0.1);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(wait));
        }
    }
}
