use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a grade code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("unknown grade code {0} (expected 1, 2, 3 or 23)")]
    Unknown(u32),
    #[error("grade code is not a number: “{0}”")]
    NotANumber(String),
}

/// Certification level of a color.  [`Grade::Three`] is the easiest
/// and [`Grade::One`] the hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
         Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    One = 1,
    Two = 2,
    Three = 3,
}

impl TryFrom<u8> for Grade {
    type Error = GradeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Grade::One),
            2 => Ok(Grade::Two),
            3 => Ok(Grade::Three),
            _ => Err(GradeError::Unknown(code.into())),
        }
    }
}

impl From<Grade> for u8 {
    fn from(g: Grade) -> u8 { g as u8 }
}

/// The pool a multiple choice quiz draws from: a single grade or the
/// combined grades 2 and 3 (code `23`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GradeSelection {
    Single(Grade),
    TwoAndThree,
}

impl GradeSelection {
    /// Numeric code of the selection: 1, 2, 3 or 23.
    pub fn code(self) -> u32 {
        match self {
            GradeSelection::Single(g) => u8::from(g).into(),
            GradeSelection::TwoAndThree => 23,
        }
    }

    /// Says whether a record of grade `g` belongs to the selection.
    pub fn matches(self, g: Grade) -> bool {
        match self {
            GradeSelection::Single(s) => s == g,
            GradeSelection::TwoAndThree => matches!(g, Grade::Two | Grade::Three),
        }
    }

    /// Title shown to the candidate, e.g. “3級”.
    pub fn title(self) -> String {
        match self {
            GradeSelection::Single(g) => format!("{}級", u8::from(g)),
            GradeSelection::TwoAndThree => "2級（+3級）".to_string(),
        }
    }
}

impl From<Grade> for GradeSelection {
    fn from(g: Grade) -> Self { GradeSelection::Single(g) }
}

impl From<GradeSelection> for u32 {
    fn from(s: GradeSelection) -> u32 { s.code() }
}

impl TryFrom<u32> for GradeSelection {
    type Error = GradeError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            23 => Ok(GradeSelection::TwoAndThree),
            c => u8::try_from(c).map_err(|_| GradeError::Unknown(c))
                .and_then(Grade::try_from)
                .map(GradeSelection::Single),
        }
    }
}

impl FromStr for GradeSelection {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().parse::<u32>()
            .map_err(|_| GradeError::NotANumber(s.to_string()))?;
        GradeSelection::try_from(code)
    }
}

impl fmt::Display for GradeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One named color of the multiple choice dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Unique within a dataset.
    pub id: u32,
    pub grade: Grade,
    /// Traditional name, the expected answer.
    pub color_name: String,
    /// Systematic name (e.g. “strong reddish orange”).
    pub system_name: String,
    /// `#RRGGBB`.
    pub color_code: String,
    pub explanation: String,
    pub pccs_notation: String,
    pub munsell_value: String,
}

/// A color of the gradient ordering questions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientColorRecord {
    pub color_name: String,
    pub system_name: String,
    pub color_code: String,
    pub munsell_value: String,
}

/// HSL component a gradient question sorts by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    Lightness,
    Saturation,
}

/// Direction of a gradient question.  `Desc` puts the largest value
/// first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// A drag-to-reorder question of the grade 1 quiz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientQuizQuestion {
    pub id: u32,
    #[serde(rename = "type")]
    pub sort_type: SortType,
    pub direction: Direction,
    /// Instruction shown to the candidate.
    pub description: String,
    /// The colors to arrange, in no meaningful order.
    pub colors: Vec<GradientColorRecord>,
}
