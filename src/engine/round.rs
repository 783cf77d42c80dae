use rand::Rng;

use crate::engine::generator::generate;
use crate::engine::levels::{LEVEL_MAX, LEVEL_MIN, LevelStore};
use crate::engine::scheduler::{Scheduler, TimerToken};
use crate::model::{Operation, Problem, RoundState};

pub const COUNTDOWN_SECONDS: u32 = 10;
pub const TICK_SECONDS: f64 = 1.0;
pub const DWELL_CORRECT_SECONDS: f64 = 1.5;
pub const DWELL_WRONG_SECONDS: f64 = 2.0;
pub const LEVEL_UP_DELTA: u32 = 1;
pub const LEVEL_DOWN_DELTA: u32 = 5;

/// Máquina de estados de ronda: `Playing → {Correct, Wrong, Timeout} → Playing`.
///
/// Invariante de temporizadores: como mucho hay un token armado por rol, y
/// nunca conviven cuenta atrás y dwell (jugando solo hay tick; en feedback
/// solo hay dwell). Toda transición cancela los tokens del estado que deja.
pub struct Round {
    operation: Operation,
    level: u32,
    problem: Problem,
    state: RoundState,
    time_left: u32,
    answered: bool,
    scheduler: Scheduler,
    countdown: Option<TimerToken>,
    dwell: Option<TimerToken>,
}

impl Round {
    /// Arranca la primera ronda para una operación, cargando su nivel guardado.
    pub fn begin(
        operation: Operation,
        store: &dyn LevelStore,
        now: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let level = store.load(operation);
        let mut round = Self {
            operation,
            level,
            problem: generate(operation, level, rng),
            state: RoundState::Playing,
            time_left: COUNTDOWN_SECONDS,
            answered: false,
            scheduler: Scheduler::new(),
            countdown: None,
            dwell: None,
        };
        round.countdown = Some(round.scheduler.schedule_after(now, TICK_SECONDS));
        log::debug!(
            "ronda inicial de {} al nivel {}",
            operation.slug(),
            level
        );
        round
    }

    /// Procesa los temporizadores vencidos. Devuelve `true` si arrancó una
    /// ronda nueva (la capa de UI limpia entonces el campo de respuesta).
    pub fn poll(&mut self, now: f64, store: &mut dyn LevelStore, rng: &mut impl Rng) -> bool {
        let mut advanced = false;
        for token in self.scheduler.fire_due(now) {
            if self.countdown == Some(token) {
                self.countdown = None;
                self.time_left -= 1;
                if self.time_left == 0 {
                    self.enter_timeout(now, store);
                } else {
                    self.countdown = Some(self.scheduler.schedule_after(now, TICK_SECONDS));
                }
            } else if self.dwell == Some(token) {
                self.dwell = None;
                self.next_round(now, rng);
                advanced = true;
            }
            // Un token que ya no está registrado en ningún rol es obsoleto y se ignora.
        }
        advanced
    }

    /// Única entrada de respuesta. Fuera de `Playing`, tras la respuesta ya
    /// aceptada de la ronda, o con texto no numérico, no hace nada.
    pub fn submit_answer(&mut self, raw: &str, now: f64, store: &mut dyn LevelStore) {
        if self.state != RoundState::Playing || self.answered {
            return;
        }
        let Ok(value) = raw.trim().parse::<u32>() else {
            return;
        };
        self.answered = true;
        self.cancel_timers();
        if value == self.problem.answer {
            self.state = RoundState::Correct;
            self.apply_level_delta(store, true);
            self.dwell = Some(self.scheduler.schedule_after(now, DWELL_CORRECT_SECONDS));
        } else {
            self.state = RoundState::Wrong;
            self.apply_level_delta(store, false);
            self.dwell = Some(self.scheduler.schedule_after(now, DWELL_WRONG_SECONDS));
        }
    }

    /// Reinicio explícito: nivel a 1 y ronda nueva inmediata, en cualquier estado.
    pub fn reset(&mut self, now: f64, store: &mut dyn LevelStore, rng: &mut impl Rng) {
        self.level = LEVEL_MIN;
        store.save(self.operation, self.level);
        log::info!("nivel de {} reiniciado a {}", self.operation.slug(), self.level);
        self.next_round(now, rng);
    }

    fn enter_timeout(&mut self, now: f64, store: &mut dyn LevelStore) {
        self.state = RoundState::Timeout;
        self.cancel_timers();
        self.apply_level_delta(store, false);
        self.dwell = Some(self.scheduler.schedule_after(now, DWELL_WRONG_SECONDS));
    }

    fn next_round(&mut self, now: f64, rng: &mut impl Rng) {
        self.cancel_timers();
        self.problem = generate(self.operation, self.level, rng);
        self.state = RoundState::Playing;
        self.time_left = COUNTDOWN_SECONDS;
        self.answered = false;
        self.countdown = Some(self.scheduler.schedule_after(now, TICK_SECONDS));
    }

    /// El nivel se guarda en la misma transición que lo cambia; un reinicio
    /// a mitad de feedback no pierde el resultado de la ronda ya resuelta.
    fn apply_level_delta(&mut self, store: &mut dyn LevelStore, correct: bool) {
        let before = self.level;
        self.level = if correct {
            (self.level + LEVEL_UP_DELTA).min(LEVEL_MAX)
        } else {
            self.level.saturating_sub(LEVEL_DOWN_DELTA).max(LEVEL_MIN)
        };
        store.save(self.operation, self.level);
        log::info!(
            "{}: nivel {} -> {} ({:?})",
            self.operation.slug(),
            before,
            self.level,
            self.state
        );
    }

    fn cancel_timers(&mut self) {
        if let Some(token) = self.countdown.take() {
            self.scheduler.cancel(token);
        }
        if let Some(token) = self.dwell.take() {
            self.scheduler.cancel(token);
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Fracción de progreso `nivel / 1000` para la barra inferior.
    pub fn progress(&self) -> f32 {
        self.level as f32 / LEVEL_MAX as f32
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Próximo vencimiento de temporizador (para programar el repintado).
    pub fn next_deadline(&self) -> Option<f64> {
        self.scheduler.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::levels::SessionLevels;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn answer_of(round: &Round) -> String {
        round.problem().answer.to_string()
    }

    #[test]
    fn correct_answer_raises_level_and_dwells() {
        let mut store = SessionLevels::new();
        let mut rng = rng();
        let mut round = Round::begin(Operation::Addition, &store, 0.0, &mut rng);
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.time_left(), 10);

        let answer = answer_of(&round);
        round.submit_answer(&answer, 0.5, &mut store);
        assert_eq!(round.state(), RoundState::Correct);
        assert_eq!(round.level(), 2);
        assert_eq!(store.load(Operation::Addition), 2);

        // todavía en dwell
        assert!(!round.poll(1.0, &mut store, &mut rng));
        assert_eq!(round.state(), RoundState::Correct);
        // dwell de 1.5 s cumplido: ronda nueva con la cuenta atrás completa
        assert!(round.poll(2.1, &mut store, &mut rng));
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.time_left(), 10);
    }

    #[test]
    fn wrong_answer_floors_level_at_one() {
        let mut store = SessionLevels::new();
        store.save(Operation::Subtraction, 3);
        let mut rng = rng();
        let mut round = Round::begin(Operation::Subtraction, &store, 0.0, &mut rng);
        assert_eq!(round.level(), 3);

        let wrong = (round.problem().answer + 1).to_string();
        round.submit_answer(&wrong, 0.5, &mut store);
        assert_eq!(round.state(), RoundState::Wrong);
        assert_eq!(round.level(), 1);
        assert_eq!(store.load(Operation::Subtraction), 1);
    }

    #[test]
    fn correct_answer_caps_level_at_thousand() {
        let mut store = SessionLevels::new();
        store.save(Operation::Multiplication, 999);
        let mut rng = rng();
        let mut round = Round::begin(Operation::Multiplication, &store, 0.0, &mut rng);
        let answer = answer_of(&round);
        round.submit_answer(&answer, 0.5, &mut store);
        assert_eq!(round.level(), 1000);

        // otra ronda correcta: sigue en el tope
        assert!(round.poll(2.1, &mut store, &mut rng));
        let answer = answer_of(&round);
        round.submit_answer(&answer, 2.5, &mut store);
        assert_eq!(round.level(), 1000);
    }

    #[test]
    fn countdown_reaching_zero_times_out() {
        let mut store = SessionLevels::new();
        store.save(Operation::Division, 20);
        let mut rng = rng();
        let mut round = Round::begin(Operation::Division, &store, 0.0, &mut rng);

        let mut now = 0.0;
        for expected in (0..10).rev() {
            now += 1.0;
            round.poll(now, &mut store, &mut rng);
            assert_eq!(round.time_left(), expected);
        }
        assert_eq!(round.state(), RoundState::Timeout);
        assert_eq!(round.level(), 15);
        assert_eq!(store.load(Operation::Division), 15);

        // dwell de 2 s y vuelta a jugar
        assert!(round.poll(now + 2.0, &mut store, &mut rng));
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.time_left(), 10);
    }

    #[test]
    fn second_submission_in_same_round_is_ignored() {
        let mut store = SessionLevels::new();
        let mut rng = rng();
        let mut round = Round::begin(Operation::Addition, &store, 0.0, &mut rng);
        let answer = answer_of(&round);
        round.submit_answer(&answer, 0.5, &mut store);
        assert_eq!(round.level(), 2);

        // ni una respuesta repetida ni una incorrecta cambian ya nada
        round.submit_answer(&answer, 0.6, &mut store);
        round.submit_answer("999999", 0.7, &mut store);
        assert_eq!(round.state(), RoundState::Correct);
        assert_eq!(round.level(), 2);
    }

    #[test]
    fn empty_or_non_numeric_input_is_not_a_submission() {
        let mut store = SessionLevels::new();
        let mut rng = rng();
        let mut round = Round::begin(Operation::Addition, &store, 0.0, &mut rng);
        round.submit_answer("", 0.5, &mut store);
        round.submit_answer("abc", 0.6, &mut store);
        round.submit_answer("-4", 0.7, &mut store);
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.level(), 1);

        // la ronda sigue viva: una respuesta válida posterior se acepta
        let answer = answer_of(&round);
        round.submit_answer(&answer, 0.8, &mut store);
        assert_eq!(round.state(), RoundState::Correct);
    }

    #[test]
    fn reset_mid_feedback_starts_fresh_round_at_level_one() {
        let mut store = SessionLevels::new();
        store.save(Operation::Multiplication, 50);
        let mut rng = rng();
        let mut round = Round::begin(Operation::Multiplication, &store, 0.0, &mut rng);
        let wrong = (round.problem().answer + 1).to_string();
        round.submit_answer(&wrong, 0.5, &mut store);
        assert_eq!(round.state(), RoundState::Wrong);

        round.reset(1.0, &mut store, &mut rng);
        assert_eq!(round.state(), RoundState::Playing);
        assert_eq!(round.level(), 1);
        assert_eq!(round.time_left(), 10);
        assert_eq!(store.load(Operation::Multiplication), 1);

        // el dwell pendiente quedó cancelado: no hay doble avance de ronda
        assert!(!round.poll(2.6, &mut store, &mut rng));
        assert_eq!(round.time_left(), 9);
        assert_eq!(round.state(), RoundState::Playing);
    }

    #[test]
    fn stale_countdown_does_not_tick_after_submission() {
        let mut store = SessionLevels::new();
        let mut rng = rng();
        let mut round = Round::begin(Operation::Addition, &store, 0.0, &mut rng);
        let answer = answer_of(&round);
        // responde con el tick de 1.0 ya vencido pero sin procesar
        round.submit_answer(&answer, 1.2, &mut store);
        assert!(!round.poll(1.3, &mut store, &mut rng));
        assert_eq!(round.state(), RoundState::Correct);
        assert_eq!(round.time_left(), 10);
    }

    #[test]
    fn level_never_leaves_range_under_any_event_sequence() {
        let mut store = SessionLevels::new();
        let mut rng = rng();
        let mut round = Round::begin(Operation::Division, &store, 0.0, &mut rng);
        let mut now = 0.0;
        for i in 0..200 {
            now += 0.1;
            if i % 3 == 0 {
                let answer = answer_of(&round);
                round.submit_answer(&answer, now, &mut store);
            } else {
                round.submit_answer("0", now, &mut store);
            }
            now += 2.5;
            round.poll(now, &mut store, &mut rng);
            let level = round.level();
            assert!((LEVEL_MIN..=LEVEL_MAX).contains(&level));
            assert_eq!(store.load(Operation::Division), level);
            assert_eq!(round.state(), RoundState::Playing);
        }
    }
}
