pub mod app;
pub mod board;
pub mod config;
pub mod data;
pub mod model;
pub mod notice;
pub mod quiz_gate;
pub mod settings;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::WireGameApp;
