use crate::engine::levels::SessionLevels;
use crate::engine::round::Round;
use crate::model::{AppState, Operation};

/// Estado raíz de la aplicación: el almacén de niveles de la sesión, la ronda
/// activa (si estamos jugando) y el buffer de la respuesta tecleada.
pub struct MathHillApp {
    pub state: AppState,
    pub levels: SessionLevels,
    pub round: Option<Round>,
    pub input: String,
    pub focus_input: bool,
}

impl MathHillApp {
    pub fn new() -> Self {
        Self {
            state: AppState::Home,
            levels: SessionLevels::new(),
            round: None,
            input: String::new(),
            focus_input: false,
        }
    }

    /// Entra en el juego con la operación elegida, cargando su nivel de sesión.
    pub fn start_game(&mut self, operation: Operation, now: f64) {
        let mut rng = rand::thread_rng();
        self.round = Some(Round::begin(operation, &self.levels, now, &mut rng));
        self.input.clear();
        self.focus_input = true;
        self.state = AppState::Game;
    }

    /// Vuelta a la portada; el nivel ya quedó guardado en cada transición.
    pub fn go_home(&mut self) {
        self.round = None;
        self.input.clear();
        self.state = AppState::Home;
    }

    /// Avanza los temporizadores con el reloj de frames de egui.
    pub fn tick(&mut self, now: f64) {
        if let Some(round) = self.round.as_mut() {
            let mut rng = rand::thread_rng();
            if round.poll(now, &mut self.levels, &mut rng) {
                // ronda nueva: respuesta anterior fuera y foco al campo
                self.input.clear();
                self.focus_input = true;
            }
        }
    }

    /// Envía el contenido del campo de respuesta (Enter en la UI).
    pub fn submit(&mut self, now: f64) {
        if let Some(round) = self.round.as_mut() {
            round.submit_answer(&self.input, now, &mut self.levels);
        }
    }

    /// Botón de reinicio: nivel a 1 y ronda nueva inmediata.
    pub fn reset_level(&mut self, now: f64) {
        if let Some(round) = self.round.as_mut() {
            let mut rng = rand::thread_rng();
            round.reset(now, &mut self.levels, &mut rng);
            self.input.clear();
            self.focus_input = true;
        }
    }
}

impl Default for MathHillApp {
    fn default() -> Self {
        Self::new()
    }
}
