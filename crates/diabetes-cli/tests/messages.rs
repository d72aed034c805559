//! Tests for the bundled translation tables.

use diabetes_cli::messages::{Language, MessageKey, Translations};
use diabetes_model::{BmiCategory, Prediction};

#[test]
fn every_language_has_every_key() {
    let translations = Translations::builtin().unwrap();
    for language in Language::ALL {
        assert!(
            translations.missing_keys(language).is_empty(),
            "{language} is missing {:?}",
            translations.missing_keys(language)
        );
    }
}

#[test]
fn lookup_returns_localized_text() {
    let translations = Translations::builtin().unwrap();
    assert_eq!(
        translations.lookup(Language::English, MessageKey::DiabeticHeadline),
        "Diabetic"
    );
    assert_ne!(
        translations.lookup(Language::Hindi, MessageKey::DiabeticHeadline),
        "Diabetic"
    );
}

#[test]
fn missing_translation_falls_back_to_english_then_key() {
    let translations = Translations::from_tables([
        (Language::English, r#""result.title" = "Prediction Results""#),
        (Language::Hindi, ""),
    ])
    .unwrap();

    assert_eq!(
        translations.lookup(Language::Hindi, MessageKey::ResultTitle),
        "Prediction Results"
    );
    assert_eq!(
        translations.lookup(Language::Hindi, MessageKey::Disclaimer),
        "disclaimer"
    );
    assert_eq!(
        translations.missing_keys(Language::Hindi).len(),
        MessageKey::ALL.len()
    );
}

#[test]
fn malformed_table_is_an_error() {
    assert!(Translations::from_tables([(Language::English, "not toml =")]).is_err());
}

#[test]
fn keys_cover_categories_and_predictions() {
    assert_eq!(
        MessageKey::for_category(BmiCategory::SlightlyOverweight).as_str(),
        "bmi.category.slightly_overweight"
    );
    let [headline, detail, advice] = MessageKey::for_prediction(Prediction::NonDiabetic);
    assert_eq!(headline.as_str(), "result.non_diabetic.headline");
    assert_eq!(detail.as_str(), "result.non_diabetic.detail");
    assert_eq!(advice.as_str(), "result.non_diabetic.advice");
}

#[test]
fn language_parses_tags_and_names() {
    assert_eq!("hi".parse::<Language>().unwrap(), Language::Hindi);
    assert_eq!("English".parse::<Language>().unwrap(), Language::English);
    assert!("fr".parse::<Language>().is_err());
}
