// src/timer.rs

/// Resultado de avanzar la cuenta atrás
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Idle,
    Ticked,
    Expired,
}

/// Cuenta atrás en segundos enteros alimentada con el delta de cada frame.
/// Acumula tiempo real y descuenta un segundo por cada segundo completo.
#[derive(Clone, Debug)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    running: bool,
    accumulator: f32,
}

impl Countdown {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            running: false,
            accumulator: 0.0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// No arranca si ya llegó a cero
    pub fn start(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    /// Congela la cuenta; la fracción de segundo ya jugada se conserva
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Añade el tiempo del frame; puede descontar varios segundos de golpe
    pub fn advance(&mut self, frame_dt: f32) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }
        self.accumulator += frame_dt.max(0.0);
        let mut event = TimerEvent::Idle;
        while self.accumulator >= 1.0 && self.running {
            self.accumulator -= 1.0;
            event = self.tick();
        }
        event
    }

    /// Un segundo exacto
    pub fn tick(&mut self) -> TimerEvent {
        if !self.running || self.remaining == 0 {
            return TimerEvent::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.stop();
            TimerEvent::Expired
        } else {
            TimerEvent::Ticked
        }
    }
}
