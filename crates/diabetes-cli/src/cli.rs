//! CLI argument definitions for the diabetes risk form.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use diabetes_model::{ConditionFlag, RawInput};

use diabetes_cli::messages::Language;

#[derive(Parser)]
#[command(
    name = "diabetes-risk",
    version,
    about = "Diabetes risk prediction from a short health questionnaire",
    long_about = "Collects health attributes, derives BMI, and scores the answers with a \
                  pinned diabetes classifier.\n\n\
                  The prediction is not a diagnosis. Consult a healthcare professional."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow submitted health values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble the answers, score them, and show the risk message.
    Predict(PredictArgs),

    /// Compute BMI and its category without scoring.
    Bmi(BmiArgs),

    /// List the classifier's features in canonical order.
    Features,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// JSON file with answers keyed by column name (Sex, Age, Weight, Height, HighBP, ...).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub form: FormArgs,

    /// Model manifest (TOML) pinning the classifier artifact.
    #[arg(long = "model", value_name = "MANIFEST", default_value = "models/manifest.toml")]
    pub model: PathBuf,

    /// Assembler configuration (TOML): BMI scheme, constant fields, input limits.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language for the result message.
    #[arg(long = "language", value_enum, default_value = "en")]
    pub language: LanguageArg,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Also print the assembled feature vector.
    #[arg(long = "show-features")]
    pub show_features: bool,
}

#[derive(Parser)]
pub struct BmiArgs {
    /// Weight in kilograms.
    #[arg(long = "weight", value_name = "KG")]
    pub weight: f64,

    /// Height in feet (0.1 steps).
    #[arg(long = "height", value_name = "FEET")]
    pub height: f64,

    /// Sex, used by the sex-specific scheme.
    #[arg(long = "sex", value_name = "Male|Female")]
    pub sex: Option<String>,

    /// Assembler configuration (TOML) selecting the BMI scheme.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language for the category label.
    #[arg(long = "language", value_enum, default_value = "en")]
    pub language: LanguageArg,
}

/// Form answers given as flags. Values are passed through unvalidated.
#[derive(Args, Default)]
pub struct FormArgs {
    #[arg(long = "sex", value_name = "Male|Female")]
    pub sex: Option<String>,
    /// Age in years.
    #[arg(long = "age", value_name = "YEARS")]
    pub age: Option<i64>,
    /// Weight in kilograms.
    #[arg(long = "weight", value_name = "KG")]
    pub weight: Option<f64>,
    /// Height in feet (0.1 steps).
    #[arg(long = "height", value_name = "FEET")]
    pub height: Option<f64>,
    #[arg(long = "high-bp", value_name = "Yes|No")]
    pub high_bp: Option<String>,
    #[arg(long = "high-chol", value_name = "Yes|No")]
    pub high_chol: Option<String>,
    #[arg(long = "smoker", value_name = "Yes|No")]
    pub smoker: Option<String>,
    #[arg(long = "stroke", value_name = "Yes|No")]
    pub stroke: Option<String>,
    #[arg(long = "heart-disease", value_name = "Yes|No")]
    pub heart_disease: Option<String>,
    #[arg(long = "phys-activity", value_name = "Yes|No")]
    pub phys_activity: Option<String>,
    #[arg(long = "fruits", value_name = "Yes|No")]
    pub fruits: Option<String>,
    #[arg(long = "veggies", value_name = "Yes|No")]
    pub veggies: Option<String>,
    #[arg(long = "heavy-alcohol", value_name = "Yes|No")]
    pub heavy_alcohol: Option<String>,
    #[arg(long = "diff-walk", value_name = "Yes|No")]
    pub diff_walk: Option<String>,
    /// General health, 1 (excellent) to 5 (poor).
    #[arg(long = "gen-hlth", value_name = "1-5")]
    pub gen_hlth: Option<i64>,
    /// Days of poor mental health in the past month.
    #[arg(long = "ment-hlth", value_name = "DAYS")]
    pub ment_hlth: Option<i64>,
    /// Days of poor physical health in the past month.
    #[arg(long = "phys-hlth", value_name = "DAYS")]
    pub phys_hlth: Option<i64>,
}

impl FormArgs {
    /// Snapshot of the answers given on the command line.
    pub fn to_raw_input(&self) -> RawInput {
        let mut raw = RawInput {
            sex: self.sex.clone(),
            age: self.age,
            weight_kg: self.weight,
            height_ft: self.height,
            gen_hlth: self.gen_hlth,
            ment_hlth: self.ment_hlth,
            phys_hlth: self.phys_hlth,
            ..RawInput::default()
        };
        let answers = [
            (ConditionFlag::HighBp, &self.high_bp),
            (ConditionFlag::HighChol, &self.high_chol),
            (ConditionFlag::Smoker, &self.smoker),
            (ConditionFlag::Stroke, &self.stroke),
            (ConditionFlag::HeartDiseaseOrAttack, &self.heart_disease),
            (ConditionFlag::PhysActivity, &self.phys_activity),
            (ConditionFlag::Fruits, &self.fruits),
            (ConditionFlag::Veggies, &self.veggies),
            (ConditionFlag::HvyAlcoholConsump, &self.heavy_alcohol),
            (ConditionFlag::DiffWalk, &self.diff_walk),
        ];
        for (flag, answer) in answers {
            if let Some(answer) = answer {
                raw.set_condition(flag, answer.as_str());
            }
        }
        raw
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    #[value(alias = "english")]
    En,
    #[value(alias = "hindi")]
    Hi,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::En => Language::English,
            LanguageArg::Hi => Language::Hindi,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
