//! Tests for quiz configuration.

use super::*;
use rand::Rng;
use std::io::Write;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        question_count = 20
        gradient_question_count = 5
        random_seed = 42
        unlock_gating = true

        [data]
        colors = "data/colors.json"
        gradient = "data/grade1_colors.json"
    "#;

    let config = QuizConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.question_count, 20);
    assert_eq!(config.gradient_question_count, 5);
    assert_eq!(config.random_seed, Some(42));
    assert!(config.unlock_gating);
    assert_eq!(config.data.colors, Some(PathBuf::from("data/colors.json")));
    assert_eq!(config.data.gradient,
               Some(PathBuf::from("data/grade1_colors.json")));
}

#[test]
fn test_empty_is_default() {
    let config = QuizConfig::from_toml_str("").unwrap();
    assert_eq!(config, QuizConfig::default());
    assert_eq!(config.question_count, 10);
    assert!(!config.access_policy().gating);
}

#[test]
fn test_zero_questions_rejected() {
    let err = QuizConfig::from_toml_str("question_count = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    let err = QuizConfig::from_toml_str("gradient_question_count = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_bad_toml() {
    let err = QuizConfig::from_toml_str("question_count = \"ten\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = QuizConfig::new()
        .with_question_count(3)
        .with_gradient_question_count(4)
        .with_random_seed(123)
        .with_unlock_gating(true);

    assert_eq!(config.question_count, 3);
    assert_eq!(config.gradient_question_count, 4);
    assert_eq!(config.random_seed, Some(123));
    assert!(config.access_policy().gating);
    assert!(config.validate().is_ok());
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let config = QuizConfig::new().with_random_seed(7);
    let a: Vec<u32> = (0 .. 8).map({ let mut r = config.rng(); move |_| r.random() })
        .collect();
    let b: Vec<u32> = (0 .. 8).map({ let mut r = config.rng(); move |_| r.random() })
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_load_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "question_count = 4").unwrap();
    let config = QuizConfig::load(f.path()).unwrap();
    assert_eq!(config.question_count, 4);
    assert!(matches!(QuizConfig::load("/nonexistent/quiz.toml"),
                     Err(ConfigError::Io(_))));
}
