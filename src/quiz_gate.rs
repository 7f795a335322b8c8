// src/quiz_gate.rs

use crate::data::QuestionBank;
use crate::model::{PendingConnection, QuizQuestion};

/// Pregunta abierta para una conexión pendiente
#[derive(Clone, Debug)]
pub struct QuizGate {
    pub pending: PendingConnection,
    pub question: QuizQuestion,
    pub selected: Option<usize>,
}

impl QuizGate {
    /// `None` si el banco no tiene pregunta para ese color
    pub fn open(bank: &QuestionBank, pending: PendingConnection) -> Option<Self> {
        let question = bank.question_for(pending.color)?.clone();
        Some(Self {
            pending,
            question,
            selected: None,
        })
    }

    pub fn select_option(&mut self, index: usize) {
        if index < self.question.options.len() {
            self.selected = Some(index);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    /// Sin selección no hace nada. La selección se limpia en ambos casos.
    pub fn submit(&mut self) -> Option<bool> {
        let index = self.selected.take()?;
        Some(self.question.is_correct(index))
    }
}
