use rand::Rng;

use crate::model::{Operation, Problem};

/// Genera un problema para la operación y nivel dados. Nunca falla:
/// todos los operandos se sortean uniformemente dentro de la banda del nivel.
pub fn generate(operation: Operation, level: u32, rng: &mut impl Rng) -> Problem {
    match operation {
        Operation::Addition => {
            let bound = digit_bound(level);
            let operand1 = rng.gen_range(1..=bound);
            let operand2 = rng.gen_range(1..=bound);
            Problem {
                operand1,
                operand2,
                answer: operand1 + operand2,
                symbol: operation.symbol(),
            }
        }
        Operation::Subtraction => {
            let bound = digit_bound(level);
            let operand1 = rng.gen_range(1..=bound);
            // operand2 ≤ operand1: el resultado nunca es negativo (puede ser 0)
            let operand2 = rng.gen_range(1..=operand1);
            Problem {
                operand1,
                operand2,
                answer: operand1 - operand2,
                symbol: operation.symbol(),
            }
        }
        Operation::Multiplication => {
            let bound = band_bound(level);
            let operand1 = rng.gen_range(1..=bound);
            let operand2 = rng.gen_range(1..=bound);
            Problem {
                operand1,
                operand2,
                answer: operand1 * operand2,
                symbol: operation.symbol(),
            }
        }
        Operation::Division => {
            // Se sortean cociente y divisor; el dividendo se deriva para que
            // la división sea exacta. El dividendo queda fuera de la banda.
            let bound = band_bound(level);
            let answer = rng.gen_range(1..=bound);
            let operand2 = rng.gen_range(1..=bound);
            Problem {
                operand1: answer * operand2,
                operand2,
                answer,
                symbol: operation.symbol(),
            }
        }
    }
}

/// Cota para suma y resta: `d = min(5, nivel/200 + 1)` cifras, cota `10^d - 1`.
fn digit_bound(level: u32) -> u32 {
    let digits = (level / 200 + 1).min(5);
    10u32.pow(digits) - 1
}

/// Banda escalonada para multiplicación y división (los límites 100 y 500
/// son inclusivos: el salto ocurre en 101 y 501).
fn band_bound(level: u32) -> u32 {
    if level <= 100 {
        9
    } else if level <= 500 {
        99
    } else {
        999
    }
}
