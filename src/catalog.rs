//! The levels a candidate may choose from, and who may start them.

use lazy_static::lazy_static;
use serde::Serialize;

use crate::dataset::ty::{Grade, GradeSelection};

/// How the questions of a level are asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuizMode {
    /// Pick the name of a color among four.
    MultipleChoice,
    /// Arrange colors by lightness or saturation.
    GradientOrdering,
}

/// An entry of the level menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Level {
    pub grade: GradeSelection,
    pub description: &'static str,
    /// Whether the level requires the paid content to be unlocked.
    pub locked: bool,
    pub mode: QuizMode,
}

impl Level {
    pub fn title(&self) -> String { self.grade.title() }
}

lazy_static! {
    pub(crate) static ref LEVELS: Vec<Level> = vec![
        Level { grade: Grade::Three.into(),
                description: "公式テキスト掲載の3級範囲（61色）から出題！",
                locked: false,
                mode: QuizMode::MultipleChoice },
        Level { grade: Grade::Two.into(),
                description: "公式テキスト掲載の2級範囲（63色）から出題！",
                locked: true,
                mode: QuizMode::MultipleChoice },
        Level { grade: GradeSelection::TwoAndThree,
                description: "公式テキスト掲載の3級・2級の全124色から腕試し！",
                locked: true,
                mode: QuizMode::MultipleChoice },
        Level { grade: Grade::One.into(),
                description: "明度・彩度のグラデーション整列に挑戦！",
                locked: true,
                mode: QuizMode::GradientOrdering },
    ];
}

/// Return the levels in menu order.
pub fn levels() -> &'static [Level] { &LEVELS }

/// Return the level of the given grade selection.
pub fn level(grade: GradeSelection) -> Option<&'static Level> {
    LEVELS.iter().find(|l| l.grade == grade)
}

/// Decides whether a level may be started.
///
/// With `gating` off (the default) every level is open, whatever its
/// `locked` flag says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    pub gating: bool,
}

impl AccessPolicy {
    pub fn new(gating: bool) -> Self { Self { gating } }

    /// Says whether `level` may be started by a candidate who has
    /// (`unlocked`) or has not unlocked the paid content.
    pub fn may_start(&self, level: &Level, unlocked: bool) -> bool {
        !self.gating || !level.locked || unlocked
    }
}
