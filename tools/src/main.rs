//! Command line front-end of the color quizzes.
//!
//! Subcommands:
//!   quiz    Build a multiple choice quiz (JSON on stdout)
//!   order   Pick gradient questions with their scrambled order and answer key
//!   list    Print the colors grouped by grade, in hue order
//!   levels  Print the level menu and whether each level may start
//!   check   Validate datasets
//!
//! Example:
//!   cargo run -p color-quiz-tools -- quiz --colors data/colors.json \
//!       --grade 23 --seed 42

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use color_quiz::{build_questions, catalog, listing, select_gradient_questions,
                 ColorDataset, GradeSelection, GradientBank, QuizConfig};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Traditional color name quizzes", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a multiple choice quiz
    Quiz(QuizArgs),
    /// Pick gradient ordering questions
    Order(OrderArgs),
    /// Print the colors grouped by grade
    List(ColorsArgs),
    /// Print the level menu
    Levels(LevelsArgs),
    /// Validate the datasets
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ColorsArgs {
    /// JSON array of colors (defaults to `data.colors` of the config)
    #[arg(long)] colors: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct QuizArgs {
    #[command(flatten)] colors: ColorsArgs,
    /// 1, 2, 3 or 23 (grades 2 and 3 together)
    #[arg(long, default_value = "3")] grade: GradeSelection,
    #[arg(long)] count: Option<usize>,
    #[arg(long)] seed: Option<u64>,
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// JSON array of gradient questions (defaults to `data.gradient`)
    #[arg(long)] bank: Option<PathBuf>,
    /// Only this question
    #[arg(long)] id: Option<u32>,
    #[arg(long)] count: Option<usize>,
    #[arg(long)] seed: Option<u64>,
}

#[derive(Args, Debug)]
struct LevelsArgs {
    /// The candidate has unlocked the paid levels
    #[arg(long)] unlocked: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[arg(long)] colors: Option<PathBuf>,
    #[arg(long)] gradient: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("color_quiz=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<QuizConfig> {
    match path {
        Some(p) => QuizConfig::load(p)
            .with_context(|| format!("reading config {}", p.display())),
        None => Ok(QuizConfig::default()),
    }
}

fn colors_path(arg: Option<PathBuf>, cfg: &QuizConfig) -> Result<PathBuf> {
    match arg.or_else(|| cfg.data.colors.clone()) {
        Some(p) => Ok(p),
        None => bail!("no color dataset: pass --colors or set data.colors"),
    }
}

fn load_colors(path: &Path) -> Result<ColorDataset> {
    ColorDataset::from_json_file(path)
        .with_context(|| format!("loading colors from {}", path.display()))
}

fn load_bank(path: &Path) -> Result<GradientBank> {
    GradientBank::from_json_file(path)
        .with_context(|| format!("loading gradient questions from {}",
                                 path.display()))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn cmd_quiz(a: QuizArgs, mut cfg: QuizConfig) -> Result<()> {
    if let Some(seed) = a.seed { cfg = cfg.with_random_seed(seed) }
    if let Some(n) = a.count { cfg = cfg.with_question_count(n) }
    cfg.validate()?;
    let dataset = load_colors(&colors_path(a.colors.colors, &cfg)?)?;
    let questions = build_questions(dataset.records(), a.grade,
                                    cfg.question_count, &mut cfg.rng());
    if questions.is_empty() {
        bail!("no question available for {}", a.grade.title());
    }
    info!(grade = %a.grade, questions = questions.len(), "quiz ready");
    print_json(&json!({
        "title": a.grade.title(),
        "questions": questions,
    }))
}

fn cmd_order(a: OrderArgs, mut cfg: QuizConfig) -> Result<()> {
    if let Some(seed) = a.seed { cfg = cfg.with_random_seed(seed) }
    if let Some(n) = a.count { cfg = cfg.with_gradient_question_count(n) }
    cfg.validate()?;
    let path = match a.bank.or_else(|| cfg.data.gradient.clone()) {
        Some(p) => p,
        None => bail!("no gradient bank: pass --bank or set data.gradient"),
    };
    let bank = load_bank(&path)?;
    let mut rng = cfg.rng();
    let questions = match a.id {
        Some(id) => match bank.get(id) {
            Some(q) => vec![q.clone()],
            None => bail!("no gradient question with id {id}"),
        },
        None => select_gradient_questions(bank.questions(),
                                          cfg.gradient_question_count, &mut rng),
    };
    let out: Vec<_> = questions.iter().map(|q| json!({
        "id": q.id,
        "description": q.description,
        "presented": q.scrambled(&mut rng),
        "answer": q.correct_order(),
    })).collect();
    print_json(&out)
}

fn cmd_list(a: ColorsArgs, cfg: QuizConfig) -> Result<()> {
    let dataset = load_colors(&colors_path(a.colors, &cfg)?)?;
    let mut out = BufWriter::new(io::stdout().lock());
    for (grade, colors) in listing::group_for_listing(dataset.records()) {
        writeln!(out, "{}", GradeSelection::from(grade).title())?;
        for c in colors {
            writeln!(out, "  {}  {:<12} {:<8} {:<12} {}", c.color_code,
                     c.color_name, c.pccs_notation, c.munsell_value,
                     c.system_name)?;
        }
    }
    Ok(())
}

fn cmd_levels(a: LevelsArgs, cfg: QuizConfig) -> Result<()> {
    let policy = cfg.access_policy();
    let out: Vec<_> = catalog::levels().iter().map(|l| json!({
        "grade": l.grade.code(),
        "title": l.title(),
        "description": l.description,
        "mode": l.mode,
        "locked": l.locked,
        "may_start": policy.may_start(l, a.unlocked),
    })).collect();
    print_json(&out)
}

fn cmd_check(a: CheckArgs, cfg: QuizConfig) -> Result<()> {
    let colors = a.colors.or_else(|| cfg.data.colors.clone());
    let gradient = a.gradient.or_else(|| cfg.data.gradient.clone());
    if colors.is_none() && gradient.is_none() {
        bail!("nothing to check: pass --colors and/or --gradient");
    }
    if let Some(p) = colors {
        let d = load_colors(&p)?;
        println!("{}: {} colors", p.display(), d.len());
    }
    if let Some(p) = gradient {
        let b = load_bank(&p)?;
        println!("{}: {} gradient questions", p.display(), b.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_ref())?;
    match cli.command {
        Commands::Quiz(a) => cmd_quiz(a, cfg),
        Commands::Order(a) => cmd_order(a, cfg),
        Commands::List(a) => cmd_list(a, cfg),
        Commands::Levels(a) => cmd_levels(a, cfg),
        Commands::Check(a) => cmd_check(a, cfg),
    }
}
