//! Multiple choice quizzes: the candidate is shown a color and picks
//! its traditional name among (up to) four options.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::dataset::ty::{ColorRecord, GradeSelection};

/// Number of questions of a quiz unless told otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Maximum number of wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// A question of a multiple choice quiz.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub correct_answer: ColorRecord,
    /// Color names in display order, exactly one of which is
    /// `correct_answer.color_name`.
    pub options: Vec<String>,
}

impl QuizQuestion {
    /// Says whether `answer` is the name of the color shown.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer.color_name
    }
}

/// Build a quiz of at most `question_count` questions on the colors
/// of `grade`.
///
/// The pool of matching colors is shuffled once; its first
/// `question_count` colors become the questions and, for each of
/// them, the first [`DISTRACTOR_COUNT`] other colors of the shuffled
/// pool provide the wrong options.  The options are then shuffled.
/// An empty vector means no color matches `grade`.
///
/// # Example
///
/// ```
/// use color_quiz::{build_questions, GradeSelection};
/// let mut rng = rand::rng();
/// let quiz = build_questions(&[], GradeSelection::TwoAndThree, 10, &mut rng);
/// assert!(quiz.is_empty());
/// ```
pub fn build_questions<R>(all_colors: &[ColorRecord], grade: GradeSelection,
                          question_count: usize, rng: &mut R)
                          -> Vec<QuizQuestion>
where R: Rng + ?Sized {
    let mut pool: Vec<&ColorRecord> = all_colors.iter()
        .filter(|c| grade.matches(c.grade))
        .collect();
    if pool.is_empty() {
        debug!(grade = grade.code(), "no color for this grade");
        return vec![]
    }
    pool.shuffle(rng);
    let n = question_count.min(pool.len());
    debug!(grade = grade.code(), pool = pool.len(), questions = n,
           "building quiz");
    pool[.. n].iter().map(|&correct| {
        let mut options: Vec<String> = pool.iter()
            .filter(|c| c.id != correct.id)
            .take(DISTRACTOR_COUNT)
            .map(|c| c.color_name.clone())
            .collect();
        options.push(correct.color_name.clone());
        options.shuffle(rng);
        QuizQuestion { correct_answer: correct.clone(), options }
    }).collect()
}
