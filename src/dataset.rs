//! Static color datasets: parsing and validation.
//!
//! The multiple choice quizzes read a JSON array of [`ColorRecord`]s,
//! the gradient quiz a JSON array of [`GradientQuizQuestion`]s.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::color::{is_color_code, parse_hex};

pub mod ty;
use ty::*;

/// Dataset error
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("color id {0} appears more than once")]
    DuplicateId(u32),

    #[error("color {id} has an invalid color code “{code}”")]
    InvalidColorCode { id: u32, code: String },

    #[error("gradient question {0} has no colors")]
    EmptyGradientQuestion(u32),

    #[error("gradient question id {0} appears more than once")]
    DuplicateQuestionId(u32),
}

/// The validated colors of the multiple choice quizzes.
///
/// Invariants: ids are unique and every color code reads `#RRGGBB`.
#[derive(Clone, Debug, Default)]
pub struct ColorDataset {
    records: Vec<ColorRecord>,
}

impl ColorDataset {
    /// Validate `records` and wrap them.
    pub fn from_records(records: Vec<ColorRecord>) -> Result<Self, DatasetError> {
        let mut ids = HashSet::with_capacity(records.len());
        for r in &records {
            if !ids.insert(r.id) {
                return Err(DatasetError::DuplicateId(r.id))
            }
            if !is_color_code(&r.color_code) {
                return Err(DatasetError::InvalidColorCode {
                    id: r.id, code: r.color_code.clone() })
            }
        }
        debug!(colors = records.len(), "color dataset loaded");
        Ok(Self { records })
    }

    /// Parse a JSON array of colors.
    pub fn from_json_str(s: &str) -> Result<Self, DatasetError> {
        Self::from_records(serde_json::from_str(s)?)
    }

    /// Read a JSON array of colors from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn records(&self) -> &[ColorRecord] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Return an iterator on the colors belonging to `selection`, in
    /// dataset order.
    pub fn by_grade(&self, selection: GradeSelection)
                    -> impl Iterator<Item = &ColorRecord> + '_ {
        self.records.iter().filter(move |r| selection.matches(r.grade))
    }
}

/// The question bank of the gradient ordering quiz.
///
/// Malformed color codes are accepted (they sort as black) but
/// reported with a warning.
#[derive(Clone, Debug, Default)]
pub struct GradientBank {
    questions: Vec<GradientQuizQuestion>,
}

impl GradientBank {
    /// Validate `questions` and wrap them.
    pub fn from_questions(questions: Vec<GradientQuizQuestion>)
                          -> Result<Self, DatasetError> {
        let mut ids = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !ids.insert(q.id) {
                return Err(DatasetError::DuplicateQuestionId(q.id))
            }
            if q.colors.is_empty() {
                return Err(DatasetError::EmptyGradientQuestion(q.id))
            }
            for c in q.colors.iter().filter(|c| parse_hex(&c.color_code).is_none()) {
                warn!(question = q.id, color = %c.color_name,
                      code = %c.color_code,
                      "unreadable color code, it will sort as black");
            }
        }
        debug!(questions = questions.len(), "gradient bank loaded");
        Ok(Self { questions })
    }

    /// Parse a JSON array of gradient questions.
    pub fn from_json_str(s: &str) -> Result<Self, DatasetError> {
        Self::from_questions(serde_json::from_str(s)?)
    }

    /// Read a JSON array of gradient questions from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn questions(&self) -> &[GradientQuizQuestion] { &self.questions }

    pub fn len(&self) -> usize { self.questions.len() }

    pub fn is_empty(&self) -> bool { self.questions.is_empty() }

    /// Return the question with the given id.
    pub fn get(&self, id: u32) -> Option<&GradientQuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COLORS: &str = r##"[
      { "id": 1, "grade": 3, "color_name": "珊瑚色",
        "system_name": "明るい赤", "color_code": "#F76C5E",
        "explanation": "", "pccs_notation": "p24+",
        "munsell_value": "2.5R 7/11" },
      { "id": 2, "grade": 2, "color_name": "紺色",
        "system_name": "暗い紫みの青", "color_code": "#223A70",
        "explanation": "", "pccs_notation": "dkg18",
        "munsell_value": "6PB 2.5/4" }
    ]"##;

    #[test]
    fn parse_colors() {
        let d = ColorDataset::from_json_str(COLORS).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.records()[0].grade, Grade::Three);
        assert_eq!(d.by_grade(GradeSelection::TwoAndThree).count(), 2);
        assert_eq!(d.by_grade(Grade::Two.into()).count(), 1);
        assert_eq!(d.by_grade(Grade::One.into()).count(), 0);
    }

    #[test]
    fn reject_unknown_grade() {
        let json = COLORS.replace("\"grade\": 3", "\"grade\": 4");
        assert!(matches!(ColorDataset::from_json_str(&json),
                         Err(DatasetError::Json(_))));
    }

    #[test]
    fn reject_duplicate_id() {
        let json = COLORS.replace("\"id\": 2", "\"id\": 1");
        assert!(matches!(ColorDataset::from_json_str(&json),
                         Err(DatasetError::DuplicateId(1))));
    }

    #[test]
    fn reject_bad_code() {
        let json = COLORS.replace("#223A70", "223A70");
        match ColorDataset::from_json_str(&json) {
            Err(DatasetError::InvalidColorCode { id, code }) => {
                assert_eq!(id, 2);
                assert_eq!(code, "223A70");
            }
            r => panic!("unexpected {r:?}"),
        }
    }

    const GRADIENT: &str = r##"[
      { "id": 7, "type": "saturation", "direction": "desc",
        "description": "彩度の高い順に並べてください",
        "colors": [
          { "color_name": "a", "system_name": "", "color_code": "#FF0000",
            "munsell_value": "" },
          { "color_name": "b", "system_name": "", "color_code": "oops",
            "munsell_value": "" } ] }
    ]"##;

    #[test]
    fn parse_gradient_bank() {
        let bank = GradientBank::from_json_str(GRADIENT).unwrap();
        let q = bank.get(7).unwrap();
        assert_eq!(q.sort_type, SortType::Saturation);
        assert_eq!(q.direction, Direction::Desc);
        assert_eq!(q.colors.len(), 2);
        assert!(bank.get(8).is_none());
    }

    #[test]
    fn reject_empty_gradient_question() {
        let json = r#"[{ "id": 3, "type": "lightness", "direction": "asc",
                         "description": "", "colors": [] }]"#;
        assert!(matches!(GradientBank::from_json_str(json),
                         Err(DatasetError::EmptyGradientQuestion(3))));
    }

    #[test]
    fn reject_duplicate_question_id() {
        let mut questions: Vec<GradientQuizQuestion> =
            serde_json::from_str(GRADIENT).unwrap();
        questions.push(questions[0].clone());
        assert!(matches!(GradientBank::from_questions(questions),
                         Err(DatasetError::DuplicateQuestionId(7))));
    }

    #[test]
    fn read_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(COLORS.as_bytes()).unwrap();
        let d = ColorDataset::from_json_file(f.path()).unwrap();
        assert_eq!(d.len(), 2);
        assert!(matches!(ColorDataset::from_json_file("/nonexistent/colors.json"),
                         Err(DatasetError::Io(_))));
    }
}
