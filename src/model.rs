use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum WireColor {
    Red,
    Blue,
    Yellow,
    Pink,
}

impl WireColor {
    pub const ALL: [WireColor; 4] = [
        WireColor::Red,
        WireColor::Blue,
        WireColor::Yellow,
        WireColor::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WireColor::Red => "red",
            WireColor::Blue => "blue",
            WireColor::Yellow => "yellow",
            WireColor::Pink => "pink",
        }
    }

    /// Color de pintado (mismos tonos CSS que los cables originales)
    pub fn rgb(self) -> egui::Color32 {
        match self {
            WireColor::Red => egui::Color32::from_rgb(255, 0, 0),
            WireColor::Blue => egui::Color32::from_rgb(0, 0, 255),
            WireColor::Yellow => egui::Color32::from_rgb(255, 255, 0),
            WireColor::Pink => egui::Color32::from_rgb(255, 192, 203),
        }
    }
}

impl fmt::Display for WireColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Un conector del tablero. Los de la izquierda son origen, los de la derecha destino.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEndpoint {
    pub id: usize,
    pub color: WireColor,
    pub is_connected: bool,
    pub connected_to: Option<usize>,
}

impl WireEndpoint {
    pub fn new(id: usize, color: WireColor) -> Self {
        Self {
            id,
            color,
            is_connected: false,
            connected_to: None,
        }
    }

    pub fn disconnect(&mut self) {
        self.is_connected = false;
        self.connected_to = None;
    }
}

/// Emparejamiento tentativo mientras el quiz está abierto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingConnection {
    pub left_id: usize,
    pub right_id: usize,
    pub color: WireColor,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub color: WireColor,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

/// Cómo terminó la partida
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Completed,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Instructions,
    Playing,
    GameOver(GameOutcome),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Instructions
    }
}
