// src/settings.rs

use eframe::Storage;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Preferencias que sobreviven a los reinicios de partida
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
}

impl Settings {
    /// Sin clave (o con un valor raro) se usa el modo claro
    pub fn load(storage: &dyn Storage) -> Self {
        let dark_mode = storage
            .get_string(DARK_MODE_KEY)
            .map(|value| value == "true")
            .unwrap_or(false);
        Self { dark_mode }
    }

    pub fn save(&self, storage: &mut dyn Storage) {
        storage.set_string(DARK_MODE_KEY, self.dark_mode.to_string());
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}
