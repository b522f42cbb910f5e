//! Scores of a finished quiz.

use serde::Serialize;

/// Running count of answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
}

impl Tally {
    pub fn new() -> Self { Self::default() }

    /// Count one more answer.
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct { self.correct += 1 }
    }

    /// See [`percentage`].
    pub fn percentage(&self) -> u32 { percentage(self.correct, self.total) }

    pub fn rating(&self) -> Rating { Rating::of_percentage(self.percentage()) }
}

/// Return `correct / total` as a rounded percentage, `0` for an
/// empty quiz.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 { return 0 }
    (correct as f64 / total as f64 * 100.).round() as u32
}

/// Appreciation of a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Rating {
    /// Every answer right.
    Perfect,
    /// At least 80%.
    Great,
    /// At least 50%.
    Good,
    KeepTrying,
}

impl Rating {
    pub fn of_percentage(p: u32) -> Rating {
        match p {
            100 .. => Rating::Perfect,
            80 .. => Rating::Great,
            50 .. => Rating::Good,
            _ => Rating::KeepTrying,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rating::Perfect => "素晴らしい！全問正解です！",
            Rating::Great => "お見事！あともう一息！",
            Rating::Good => "良い調子！繰り返し挑戦しよう！",
            Rating::KeepTrying => "お疲れ様でした！次回がんばろう！",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rating::Perfect => "🎉",
            Rating::Great => "👍",
            Rating::Good => "😊",
            Rating::KeepTrying => "💪",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(7, 7), 100);
    }

    #[test]
    fn ratings() {
        assert_eq!(Rating::of_percentage(100), Rating::Perfect);
        assert_eq!(Rating::of_percentage(99), Rating::Great);
        assert_eq!(Rating::of_percentage(80), Rating::Great);
        assert_eq!(Rating::of_percentage(79), Rating::Good);
        assert_eq!(Rating::of_percentage(50), Rating::Good);
        assert_eq!(Rating::of_percentage(49), Rating::KeepTrying);
    }

    #[test]
    fn tally() {
        let mut t = Tally::new();
        assert_eq!(t.rating(), Rating::KeepTrying);
        for ok in [true, true, false, true, true, true, true, true, true, true] {
            t.record(ok);
        }
        assert_eq!(t, Tally { correct: 9, total: 10 });
        assert_eq!(t.percentage(), 90);
        assert_eq!(t.rating(), Rating::Great);
        assert_eq!(t.rating().emoji(), "👍");
    }
}
