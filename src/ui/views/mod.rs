pub mod board;
pub mod game_over;
pub mod instructions;
pub mod quiz;
