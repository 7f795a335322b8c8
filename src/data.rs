// src/data.rs

use crate::model::{QuizQuestion, WireColor};
use std::collections::BTreeMap;
use thiserror::Error;

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("no se pudo parsear el banco de preguntas YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("falta la pregunta para el color {0}")]
    MissingColor(WireColor),
    #[error("pregunta duplicada para el color {0}")]
    DuplicateColor(WireColor),
    #[error("la pregunta de {color} tiene {count} opciones (se esperaban {})", OPTIONS_PER_QUESTION)]
    BadOptionCount { color: WireColor, count: usize },
    #[error("la respuesta correcta de {color} ({index}) está fuera de rango")]
    BadCorrectIndex { color: WireColor, index: usize },
}

/// Preguntas del quiz indexadas por color. Siempre contiene los cuatro colores.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: BTreeMap<WireColor, QuizQuestion>,
}

impl QuestionBank {
    /// Carga el banco de preguntas desde el YAML embebido
    pub fn embedded() -> Result<Self, BankError> {
        let file_content = include_str!("data/quiz_questions.yaml");
        Self::from_yaml(file_content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, BankError> {
        let list: Vec<QuizQuestion> = serde_yaml::from_str(content)?;
        Self::from_questions(list)
    }

    pub fn from_questions(list: Vec<QuizQuestion>) -> Result<Self, BankError> {
        let mut questions = BTreeMap::new();
        for q in list {
            if q.options.len() != OPTIONS_PER_QUESTION {
                return Err(BankError::BadOptionCount {
                    color: q.color,
                    count: q.options.len(),
                });
            }
            if q.correct >= q.options.len() {
                return Err(BankError::BadCorrectIndex {
                    color: q.color,
                    index: q.correct,
                });
            }
            let color = q.color;
            if questions.insert(color, q).is_some() {
                return Err(BankError::DuplicateColor(color));
            }
        }

        // Un color sin pregunta dejaría el quiz vacío: se rechaza al cargar
        if let Some(missing) = WireColor::ALL.iter().find(|c| !questions.contains_key(*c)) {
            return Err(BankError::MissingColor(*missing));
        }

        Ok(Self { questions })
    }

    pub fn question_for(&self, color: WireColor) -> Option<&QuizQuestion> {
        self.questions.get(&color)
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_covers_every_color() {
        let bank = QuestionBank::embedded().expect("banco embebido válido");
        assert_eq!(bank.len(), 4);
        for color in WireColor::ALL {
            let q = bank.question_for(color).expect("pregunta por color");
            assert_eq!(q.color, color);
            assert_eq!(q.options.len(), OPTIONS_PER_QUESTION);
        }
    }

    #[test]
    fn embedded_bank_keeps_known_answers() {
        let bank = QuestionBank::embedded().expect("banco embebido válido");
        let red = bank.question_for(WireColor::Red).expect("red");
        assert_eq!(red.options[red.correct], "Red");
        let blue = bank.question_for(WireColor::Blue).expect("blue");
        assert_eq!(blue.options[blue.correct], "Fix Wiring");
        let yellow = bank.question_for(WireColor::Yellow).expect("yellow");
        assert_eq!(yellow.options[yellow.correct], "10");
        let pink = bank.question_for(WireColor::Pink).expect("pink");
        assert_eq!(pink.options[pink.correct], "MedBay");
    }

    #[test]
    fn missing_color_is_rejected() {
        let yaml = r#"
- color: red
  question: "q"
  options: ["a", "b", "c", "d"]
  correct: 0
"#;
        let err = QuestionBank::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, BankError::MissingColor(WireColor::Blue)));
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let yaml = r#"
- color: red
  question: "q"
  options: ["a", "b", "c", "d"]
  correct: 4
"#;
        let err = QuestionBank::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            BankError::BadCorrectIndex { color: WireColor::Red, index: 4 }
        ));
    }

    #[test]
    fn unknown_color_fails_to_parse() {
        let yaml = r#"
- color: green
  question: "q"
  options: ["a", "b", "c", "d"]
  correct: 0
"#;
        assert!(matches!(
            QuestionBank::from_yaml(yaml),
            Err(BankError::Parse(_))
        ));
    }
}
