use serde::Deserialize;
use thiserror::Error;

/// Failures that abort a submission with a 500.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("invalid submission payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("total must be greater than zero")]
    ZeroTotal,
    #[error("submission body is null")]
    NullBody,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub name: String,
    pub score: f64,
    pub total: u32,
    pub time_used: String,
    pub percentage: f64,
    pub answers: Vec<AnswerRecord>,
}

impl SubmissionRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, SubmissionError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Accepts any JSON document except `null`; fields are not looked at.
    pub fn check_body(body: &[u8]) -> Result<(), SubmissionError> {
        match serde_json::from_slice::<serde_json::Value>(body)? {
            serde_json::Value::Null => Err(SubmissionError::NullBody),
            _ => Ok(()),
        }
    }

    /// Incorrect answers in submission order, at most `limit` of them.
    pub fn incorrect_answers(&self, limit: usize) -> Vec<&AnswerRecord> {
        self.answers
            .iter()
            .filter(|a| !a.is_correct)
            .take(limit)
            .collect()
    }
}
