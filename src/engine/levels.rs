use std::collections::HashMap;

use crate::model::Operation;

pub const LEVEL_MIN: u32 = 1;
pub const LEVEL_MAX: u32 = 1000;

/// Clave de guardado por operación, p. ej. `mathhill-addition-level`.
pub fn storage_key(operation: Operation) -> String {
    format!("mathhill-{}-level", operation.slug())
}

/// Almacén de niveles inyectable en la máquina de rondas: permite sustituirlo
/// en tests sin tocar el resto del motor.
pub trait LevelStore {
    /// Nivel guardado para la operación, o 1 si no hay nada registrado.
    fn load(&self, operation: Operation) -> u32;
    /// Sobrescribe el nivel guardado para la operación.
    fn save(&mut self, operation: Operation, level: u32);
}

/// Almacén de sesión: vive lo que dure el proceso, igual que el
/// `sessionStorage` del navegador. Guarda el nivel como texto en base 10.
#[derive(Default)]
pub struct SessionLevels {
    values: HashMap<String, String>,
}

impl SessionLevels {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LevelStore for SessionLevels {
    fn load(&self, operation: Operation) -> u32 {
        self.values
            .get(&storage_key(operation))
            .and_then(|raw| raw.parse::<u32>().ok())
            .map(|level| level.clamp(LEVEL_MIN, LEVEL_MAX))
            .unwrap_or(LEVEL_MIN)
    }

    fn save(&mut self, operation: Operation, level: u32) {
        self.values.insert(storage_key(operation), level.to_string());
    }
}
