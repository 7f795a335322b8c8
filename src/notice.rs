// src/notice.rs

pub const WRONG_ANSWER: &str = "Wrong answer! Try again.";
pub const CONNECT_ALL: &str = "Connect all wires before submitting!";
pub const SOME_INCORRECT: &str = "Some wires are connected incorrectly! Try again.";
pub const ALL_CORRECT: &str = "Great job! All wires connected correctly! 🎉";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: f64,
}

/// Avisos temporales (tipo toast). El tiempo es el de `egui::InputState::time`.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
    lifetime: f64,
    now: f64,
}

impl Notices {
    pub fn new(lifetime: f64) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
            now: 0.0,
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        self.items.push(Notice {
            kind,
            text,
            expires_at: self.now + self.lifetime,
        });
    }

    /// Avanza el reloj y descarta los avisos caducados
    pub fn update(&mut self, now: f64) {
        self.now = now;
        self.items.retain(|n| n.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn last_text(&self) -> Option<&str> {
        self.items.last().map(|n| n.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
