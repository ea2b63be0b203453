use crate::domain::submission::{SubmissionError, SubmissionRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub correct_count: u32,
    /// `total - correct_count`; not checked against the number of answers.
    pub wrong_count: i64,
    pub accuracy: i64,
}

impl DerivedStats {
    pub fn compute(request: &SubmissionRequest) -> Result<Self, SubmissionError> {
        if request.total == 0 {
            return Err(SubmissionError::ZeroTotal);
        }

        let correct_count = request.answers.iter().filter(|a| a.is_correct).count() as u32;
        let wrong_count = i64::from(request.total) - i64::from(correct_count);
        let ratio = f64::from(correct_count) / f64::from(request.total) * 100.0;
        // half rounds up
        let accuracy = (ratio + 0.5).floor() as i64;

        Ok(Self {
            correct_count,
            wrong_count,
            accuracy,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    VeryGood,
    Good,
    Satisfactory,
    NeedsPractice,
}

impl Rating {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Rating::Excellent
        } else if percentage >= 80.0 {
            Rating::VeryGood
        } else if percentage >= 70.0 {
            Rating::Good
        } else if percentage >= 60.0 {
            Rating::Satisfactory
        } else {
            Rating::NeedsPractice
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "EXCELLENT",
            Rating::VeryGood => "VERY GOOD",
            Rating::Good => "GOOD",
            Rating::Satisfactory => "SATISFACTORY",
            Rating::NeedsPractice => "NEEDS PRACTICE",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rating::Excellent => "🏆",
            Rating::VeryGood => "🎯",
            Rating::Good => "👍",
            Rating::Satisfactory => "📚",
            Rating::NeedsPractice => "📖",
        }
    }
}
