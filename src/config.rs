// src/config.rs

use crate::model::WireColor;

pub const TIME_LIMIT_SECS: u32 = 30;
pub const NOTICE_SECS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub time_limit_secs: u32,
    pub notice_secs: f64,
    pub left_colors: Vec<WireColor>,
    pub right_colors: Vec<WireColor>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: TIME_LIMIT_SECS,
            notice_secs: NOTICE_SECS,
            left_colors: vec![
                WireColor::Red,
                WireColor::Blue,
                WireColor::Yellow,
                WireColor::Pink,
            ],
            // Amarillo y rosa van cruzados
            right_colors: vec![
                WireColor::Red,
                WireColor::Blue,
                WireColor::Pink,
                WireColor::Yellow,
            ],
        }
    }
}
