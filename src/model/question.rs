use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::QuizError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correct")]
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_option_text(&self) -> &str {
        // validated at load time
        self.options
            .get(self.correct_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_index)
    }
}

/// The static question configuration for one quiz, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionSet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    pub fn last_position(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, QuizError> {
        let set: QuestionSet = serde_json::from_str(contents)
            .map_err(|err| QuizError::InvalidQuestionSet(err.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, QuizError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            QuizError::InvalidQuestionSet(format!("{}: {}", path.display(), err))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::InvalidQuestionSet(
                "must contain at least one question".into(),
            ));
        }

        let mut ids = HashSet::new();
        for (position, question) in self.questions.iter().enumerate() {
            if !ids.insert(question.id) {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "questions[{position}].id {} is not unique",
                    question.id
                )));
            }
            if question.options.is_empty() {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "questions[{position}].options must not be empty"
                )));
            }
            if question.correct_index >= question.options.len() {
                return Err(QuizError::InvalidQuestionSet(format!(
                    "questions[{position}].correct_index {} is out of range for {} options",
                    question.correct_index,
                    question.options.len()
                )));
            }
        }
        Ok(())
    }
}
