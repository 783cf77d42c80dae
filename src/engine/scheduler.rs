/// Temporizadores de un solo disparo sobre el reloj de frames de egui
/// (segundos como `f64`). Quien programa un temporizador recibe un token;
/// cancelar el token garantiza que nunca dispare, aunque ya esté vencido.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

struct Armed {
    token: TimerToken,
    due: f64,
}

#[derive(Default)]
pub struct Scheduler {
    next_id: u64,
    armed: Vec<Armed>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_after(&mut self, now: f64, delay: f64) -> TimerToken {
        self.next_id += 1;
        let token = TimerToken(self.next_id);
        self.armed.push(Armed {
            token,
            due: now + delay,
        });
        token
    }

    pub fn cancel(&mut self, token: TimerToken) {
        self.armed.retain(|a| a.token != token);
    }

    /// Extrae y devuelve los tokens vencidos a `now`, en orden de vencimiento.
    /// Un token extraído no vuelve a dispararse.
    pub fn fire_due(&mut self, now: f64) -> Vec<TimerToken> {
        let mut fired: Vec<(f64, TimerToken)> = Vec::new();
        self.armed.retain(|a| {
            if a.due <= now {
                fired.push((a.due, a.token));
                false
            } else {
                true
            }
        });
        fired.sort_by(|a, b| a.0.total_cmp(&b.0));
        fired.into_iter().map(|(_, token)| token).collect()
    }

    /// Próximo vencimiento pendiente, si lo hay (para pedir el repintado).
    pub fn next_deadline(&self) -> Option<f64> {
        self.armed
            .iter()
            .map(|a| a.due)
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_due() {
        let mut s = Scheduler::new();
        let t = s.schedule_after(0.0, 1.0);
        assert!(s.fire_due(0.5).is_empty());
        assert_eq!(s.fire_due(1.0), vec![t]);
        assert!(s.fire_due(2.0).is_empty());
    }

    #[test]
    fn cancelled_token_never_fires() {
        let mut s = Scheduler::new();
        let t = s.schedule_after(0.0, 1.0);
        s.cancel(t);
        assert!(s.fire_due(5.0).is_empty());
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn due_tokens_come_out_in_deadline_order() {
        let mut s = Scheduler::new();
        let late = s.schedule_after(0.0, 2.0);
        let early = s.schedule_after(0.0, 1.0);
        assert_eq!(s.fire_due(3.0), vec![early, late]);
    }

    #[test]
    fn next_deadline_tracks_earliest_pending() {
        let mut s = Scheduler::new();
        assert_eq!(s.next_deadline(), None);
        s.schedule_after(0.0, 2.0);
        let early = s.schedule_after(0.0, 1.0);
        assert_eq!(s.next_deadline(), Some(1.0));
        s.cancel(early);
        assert_eq!(s.next_deadline(), Some(2.0));
    }
}
