//! Traditional color name quizzes.
//!
//! - [`build_questions`]: multiple choice quizzes on the colors of a
//!   [`Grade`] (or of grades 2 and 3 together).
//! - [`correct_order`] and [`judge`]: gradient questions where colors
//!   are arranged by lightness or saturation.
//!
//! Colors come from static JSON datasets, see [`ColorDataset`] and
//! [`GradientBank`].  Every function drawing random numbers takes the
//! generator as an argument, so a seeded one (e.g.
//! `rand_chacha::ChaCha8Rng`) makes quizzes reproducible.
//!
//! # Example
//!
//! ```
//! use color_quiz::{correct_order, judge, Direction, GradientColorRecord,
//!                  SortType};
//! let color = |name: &str, code: &str| GradientColorRecord {
//!     color_name: name.into(), system_name: String::new(),
//!     color_code: code.into(), munsell_value: String::new() };
//! let colors = [color("red", "#FF0000"), color("white", "#FFFFFF"),
//!               color("black", "#000000")];
//! let key = correct_order(&colors, SortType::Lightness, Direction::Asc);
//! let names: Vec<_> = key.iter().map(|c| c.color_name.as_str()).collect();
//! assert_eq!(names, ["black", "red", "white"]);
//! assert!(judge(&key, &key));
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod dataset;
pub mod gradient;
pub mod listing;
pub mod quiz;
pub mod score;

pub use catalog::{AccessPolicy, Level, QuizMode};
pub use color::{hex_to_hsl, Hsl, HslColor};
pub use config::{ConfigError, QuizConfig};
pub use dataset::{ColorDataset, DatasetError, GradientBank};
pub use dataset::ty::{ColorRecord, Direction, Grade, GradeError,
                      GradeSelection, GradientColorRecord,
                      GradientQuizQuestion, SortType};
pub use gradient::{correct_order, judge, move_color,
                   select_gradient_questions};
pub use quiz::{build_questions, QuizQuestion, DEFAULT_QUESTION_COUNT};
pub use score::{Rating, Tally};
