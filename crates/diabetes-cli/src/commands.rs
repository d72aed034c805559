use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span, trace};

use diabetes_classifier::{Classifier, ModelHandle};
use diabetes_cli::input::collect_raw_input;
use diabetes_cli::logging::redact_value;
use diabetes_cli::messages::{Language, Translations};
use diabetes_cli::render::{
    PredictionReport, ReportText, features_table, format_bmi, print_bmi, print_report,
};
use diabetes_features::{AssemblerConfig, FeatureAssembler};
use diabetes_model::{BmiAssessment, Sex};

use crate::cli::{BmiArgs, PredictArgs};

pub fn run_predict(
    args: &PredictArgs,
    model: &ModelHandle,
    translations: &Translations,
) -> Result<PredictionReport> {
    let span = info_span!("predict", model = %model.artifact_path().display());
    let _guard = span.enter();

    let raw = collect_raw_input(args.input.as_deref(), args.form.to_raw_input())?;
    let assembler = FeatureAssembler::new(load_config(args.config.as_deref())?);
    let submission = assembler.prepare(&raw)?;
    trace!(
        bmi = redact_value(&format_bmi(&submission.bmi)),
        "assembled submission"
    );

    let prediction = model.predict(&submission.features)?;
    info!(prediction = redact_value(prediction.as_str()), "scored submission");

    let report = PredictionReport {
        prediction,
        bmi: submission.bmi,
        features: submission.features,
    };
    let language = Language::from(args.language);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &ReportText::new(translations, language, &report));
        if args.show_features {
            println!("{}", features_table(Some(&report.features)));
        }
    }
    Ok(report)
}

pub fn run_bmi(args: &BmiArgs, translations: &Translations) -> Result<BmiAssessment> {
    let config = load_config(args.config.as_deref())?;
    let sex = args
        .sex
        .as_deref()
        .map(str::parse::<Sex>)
        .transpose()
        .map_err(|reason| anyhow!(reason))?;
    let assessment = FeatureAssembler::new(config).measure_bmi(args.weight, args.height, sex)?;
    debug!(
        scheme = %assessment.scheme,
        tier = %assessment.tier,
        "classified bmi"
    );
    print_bmi(&assessment, translations, Language::from(args.language));
    Ok(assessment)
}

pub fn run_features() -> Result<()> {
    println!("{}", features_table(None));
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AssemblerConfig> {
    match path {
        Some(path) => AssemblerConfig::load(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(AssemblerConfig::default()),
    }
}
