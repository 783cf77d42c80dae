// Núcleo del juego, sin dependencias de UI: generación de problemas,
// niveles por operación, temporizadores y la máquina de estados de ronda.

pub mod generator;
pub mod levels;
pub mod round;
pub mod scheduler;
