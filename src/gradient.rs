//! Gradient ordering quizzes: the candidate arranges a few colors by
//! lightness or saturation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::hex_to_hsl;
use crate::dataset::ty::{Direction, GradientColorRecord,
                         GradientQuizQuestion, SortType};

impl SortType {
    /// Return the component of `code` this criterion sorts by.
    pub fn key(self, code: &str) -> f64 {
        let hsl = hex_to_hsl(code);
        match self {
            SortType::Lightness => hsl.l,
            SortType::Saturation => hsl.s,
        }
    }
}

/// Return `colors` sorted by `sort_type` in the given `direction`.
///
/// The sort is stable: colors with equal keys keep their relative
/// order.  Unreadable color codes count as black.
pub fn correct_order(colors: &[GradientColorRecord], sort_type: SortType,
                     direction: Direction) -> Vec<GradientColorRecord> {
    let mut keyed: Vec<(f64, &GradientColorRecord)> = colors.iter()
        .map(|c| (sort_type.key(&c.color_code), c))
        .collect();
    match direction {
        Direction::Asc => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
        Direction::Desc => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
    }
    keyed.into_iter().map(|(_, c)| c.clone()).collect()
}

/// Says whether `user_order` lists the same color codes as
/// `correct_order`, position by position.
pub fn judge(user_order: &[GradientColorRecord],
             correct_order: &[GradientColorRecord]) -> bool {
    user_order.len() == correct_order.len()
        && user_order.iter().zip(correct_order)
        .all(|(u, c)| u.color_code == c.color_code)
}

/// Move the color at position `from` to position `to`, shifting the
/// colors in between, as a drag and drop does.  Return `false` and
/// leave `order` untouched if either index is out of range.
pub fn move_color(order: &mut Vec<GradientColorRecord>, from: usize,
                  to: usize) -> bool {
    if from >= order.len() || to >= order.len() { return false }
    let c = order.remove(from);
    order.insert(to, c);
    true
}

/// Pick at most `count` questions of `bank`, uniformly at random.
pub fn select_gradient_questions<R>(bank: &[GradientQuizQuestion],
                                    count: usize, rng: &mut R)
                                    -> Vec<GradientQuizQuestion>
where R: Rng + ?Sized {
    let mut picked = bank.to_vec();
    picked.shuffle(rng);
    picked.truncate(count);
    picked
}

impl GradientQuizQuestion {
    /// The answer key of the question.
    pub fn correct_order(&self) -> Vec<GradientColorRecord> {
        correct_order(&self.colors, self.sort_type, self.direction)
    }

    /// Says whether `user_order` solves the question.
    pub fn check(&self, user_order: &[GradientColorRecord]) -> bool {
        judge(user_order, &self.correct_order())
    }

    /// Return the colors shuffled, the order first presented to the
    /// candidate.
    pub fn scrambled<R>(&self, rng: &mut R) -> Vec<GradientColorRecord>
    where R: Rng + ?Sized {
        let mut colors = self.colors.clone();
        colors.shuffle(rng);
        colors
    }
}
