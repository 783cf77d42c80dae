use egui::Color32;

use crate::model::Operation;

/// Color de la tarjeta y del fondo de juego de cada operación.
pub fn operation_color(operation: Operation) -> Color32 {
    match operation {
        Operation::Addition => Color32::from_rgb(34, 197, 94),        // verde
        Operation::Subtraction => Color32::from_rgb(59, 130, 246),    // azul
        Operation::Multiplication => Color32::from_rgb(168, 85, 247), // morado
        Operation::Division => Color32::from_rgb(249, 115, 22),       // naranja
    }
}
