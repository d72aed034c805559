//! Tests for report text and tables.

use diabetes_classifier::{Classifier, ClassifierError, ModelHandle};
use diabetes_cli::messages::{Language, Translations};
use diabetes_cli::render::{PredictionReport, ReportText, features_table, format_bmi};
use diabetes_features::FeatureAssembler;
use diabetes_model::{ConditionFlag, FeatureName, FeatureVector, Prediction, RawInput};
use insta::assert_snapshot;

/// Flags every submission with high blood pressure.
struct HighBpRule;

impl Classifier for HighBpRule {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, ClassifierError> {
        let label = u8::from(features.get(FeatureName::HighBp) > 0.5);
        Ok(Prediction::from_label(label).unwrap_or(Prediction::NonDiabetic))
    }
}

fn submission(high_bp: &str) -> RawInput {
    let mut raw = RawInput::new()
        .with_sex("Male")
        .with_age(45)
        .with_weight_kg(85.0)
        .with_height_ft(5.9)
        .with_ratings(3, 5, 10);
    for flag in ConditionFlag::ALL {
        raw.set_condition(flag, "No");
    }
    raw.set_condition(ConditionFlag::HighBp, high_bp);
    raw
}

fn report_for(high_bp: &str) -> PredictionReport {
    let model = ModelHandle::from_classifier("rule", Box::new(HighBpRule));
    let prepared = FeatureAssembler::default()
        .prepare(&submission(high_bp))
        .unwrap();
    PredictionReport {
        prediction: model.predict(&prepared.features).unwrap(),
        bmi: prepared.bmi,
        features: prepared.features,
    }
}

fn describe(text: &ReportText) -> String {
    [
        text.title.as_str(),
        text.bmi_label.as_str(),
        text.bmi_category.as_str(),
        text.headline.as_str(),
        text.detail.as_str(),
        text.advice.as_str(),
    ]
    .join("\n")
}

#[test]
fn diabetic_report_text() {
    let translations = Translations::builtin().unwrap();
    let report = report_for("Yes");
    assert_eq!(format_bmi(&report.bmi), "26.28");

    let text = ReportText::new(&translations, Language::English, &report);
    assert_snapshot!(describe(&text), @r"
    Prediction Results
    BMI (calculated)
    Overweight
    Diabetic
    Based on the information provided, the model predicts that you are at risk of diabetes.
    Please consult a healthcare professional for further advice and diagnosis.
    ");
}

#[test]
fn non_diabetic_report_text() {
    let translations = Translations::builtin().unwrap();
    let text = ReportText::new(&translations, Language::English, &report_for("No"));
    assert_eq!(text.app_title, "Diabetes Prediction");
    assert_eq!(
        text.app_tagline,
        "Your health companion for predicting diabetes risk"
    );
    assert_eq!(text.headline, "Non-Diabetic");
    assert!(text.advice.starts_with("Maintain a healthy lifestyle"));
    assert!(text.disclaimer.starts_with("Disclaimer:"));
}

#[test]
fn hindi_report_uses_hindi_text() {
    let translations = Translations::builtin().unwrap();
    let report = report_for("Yes");
    let english = ReportText::new(&translations, Language::English, &report);
    let hindi = ReportText::new(&translations, Language::Hindi, &report);
    assert_ne!(english.app_title, hindi.app_title);
    assert_ne!(english.headline, hindi.headline);
    assert_ne!(english.disclaimer, hindi.disclaimer);
}

#[test]
fn report_serializes_with_column_names() {
    let report = report_for("Yes");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["prediction"], "diabetic");
    assert_eq!(json["bmi"]["category"], "overweight");

    let features = json["features"].as_object().unwrap();
    assert_eq!(features.len(), 19);
    assert_eq!(features["HighBP"], 1.0);
    assert_eq!(features["CholCheck"], 1.0);
    assert_eq!(features["NoDocbcCost"], 0.0);
    assert_eq!(features["Sex"], 1.0);
    assert_eq!(features["Age"], 45.0);
    assert!((features["BMI"].as_f64().unwrap() - 26.28).abs() < 0.01);
}

#[test]
fn features_table_lists_canonical_order() {
    let rendered = features_table(None).to_string();
    let high_bp = rendered.find("HighBP").unwrap();
    let bmi = rendered.find("BMI").unwrap();
    let sex = rendered.find("Sex").unwrap();
    assert!(high_bp < bmi && bmi < sex);

    let with_values = features_table(Some(&report_for("Yes").features)).to_string();
    assert!(with_values.contains("26.28"));
}
