// src/view_models.rs

use crate::model::{GameOutcome, Side, WireColor};

#[derive(Clone, Debug, PartialEq)]
pub struct EndpointInfo {
    pub id: usize,
    pub side: Side,
    pub color: WireColor,
    pub connected: bool,
    pub fully_connected: bool,
    pub partner: Option<usize>,
}

impl EndpointInfo {
    /// Solo los cables izquierdos libres se pueden arrastrar
    pub fn draggable(&self) -> bool {
        self.side == Side::Left && !self.connected
    }

    /// Solo los conectores derechos libres aceptan el drop
    pub fn droppable(&self) -> bool {
        self.side == Side::Right && !self.connected
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopBarInfo {
    pub time_left: u32,
    pub dark_mode: bool,
}

impl TopBarInfo {
    pub fn time_label(&self) -> String {
        format!("Time: {}s", self.time_left)
    }

    /// El botón muestra el tema al que se cambia
    pub fn theme_icon(&self) -> &'static str {
        if self.dark_mode { "☀️" } else { "🌙" }
    }
}

pub fn game_over_texts(outcome: GameOutcome) -> (&'static str, &'static str) {
    match outcome {
        GameOutcome::Completed => (
            "Congratulations! 🎉",
            "You successfully completed the wire task!",
        ),
        GameOutcome::TimedOut => ("Time's Up!", "You ran out of time!"),
    }
}
