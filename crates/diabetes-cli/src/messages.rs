//! Localized message lookup.
//!
//! Each language is a flat TOML table of `"message.key" = "text"` pairs,
//! embedded at build time. Lookups fall back to English, then to the key
//! itself, so a missing translation never aborts rendering.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use diabetes_model::{BmiCategory, Prediction};

const EN_TABLE: &str = include_str!("../locales/en.toml");
const HI_TABLE: &str = include_str!("../locales/hi.toml");

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// BCP 47 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

/// Every message the front end displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    AppTagline,
    BmiLabel,
    BmiUnderweight,
    BmiNormal,
    BmiSlightlyOverweight,
    BmiOverweight,
    BmiObese,
    ResultTitle,
    DiabeticHeadline,
    DiabeticDetail,
    DiabeticAdvice,
    NonDiabeticHeadline,
    NonDiabeticDetail,
    NonDiabeticAdvice,
    Disclaimer,
}

impl MessageKey {
    pub const ALL: [MessageKey; 16] = [
        MessageKey::AppTitle,
        MessageKey::AppTagline,
        MessageKey::BmiLabel,
        MessageKey::BmiUnderweight,
        MessageKey::BmiNormal,
        MessageKey::BmiSlightlyOverweight,
        MessageKey::BmiOverweight,
        MessageKey::BmiObese,
        MessageKey::ResultTitle,
        MessageKey::DiabeticHeadline,
        MessageKey::DiabeticDetail,
        MessageKey::DiabeticAdvice,
        MessageKey::NonDiabeticHeadline,
        MessageKey::NonDiabeticDetail,
        MessageKey::NonDiabeticAdvice,
        MessageKey::Disclaimer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app.title",
            MessageKey::AppTagline => "app.tagline",
            MessageKey::BmiLabel => "bmi.label",
            MessageKey::BmiUnderweight => "bmi.category.underweight",
            MessageKey::BmiNormal => "bmi.category.normal",
            MessageKey::BmiSlightlyOverweight => "bmi.category.slightly_overweight",
            MessageKey::BmiOverweight => "bmi.category.overweight",
            MessageKey::BmiObese => "bmi.category.obese",
            MessageKey::ResultTitle => "result.title",
            MessageKey::DiabeticHeadline => "result.diabetic.headline",
            MessageKey::DiabeticDetail => "result.diabetic.detail",
            MessageKey::DiabeticAdvice => "result.diabetic.advice",
            MessageKey::NonDiabeticHeadline => "result.non_diabetic.headline",
            MessageKey::NonDiabeticDetail => "result.non_diabetic.detail",
            MessageKey::NonDiabeticAdvice => "result.non_diabetic.advice",
            MessageKey::Disclaimer => "disclaimer",
        }
    }

    pub fn for_category(category: BmiCategory) -> Self {
        match category {
            BmiCategory::Underweight => MessageKey::BmiUnderweight,
            BmiCategory::Normal => MessageKey::BmiNormal,
            BmiCategory::SlightlyOverweight => MessageKey::BmiSlightlyOverweight,
            BmiCategory::Overweight => MessageKey::BmiOverweight,
            BmiCategory::Obese => MessageKey::BmiObese,
        }
    }

    /// Headline, detail and advice keys for a prediction.
    pub fn for_prediction(prediction: Prediction) -> [Self; 3] {
        match prediction {
            Prediction::Diabetic => [
                MessageKey::DiabeticHeadline,
                MessageKey::DiabeticDetail,
                MessageKey::DiabeticAdvice,
            ],
            Prediction::NonDiabetic => [
                MessageKey::NonDiabeticHeadline,
                MessageKey::NonDiabeticDetail,
                MessageKey::NonDiabeticAdvice,
            ],
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loaded translation tables, one per language.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<Language, BTreeMap<String, String>>,
}

impl Translations {
    /// Parses the tables shipped with the binary.
    pub fn builtin() -> Result<Self, toml::de::Error> {
        Self::from_tables([(Language::English, EN_TABLE), (Language::Hindi, HI_TABLE)])
    }

    /// Parses one TOML table per language.
    pub fn from_tables<'a>(
        tables: impl IntoIterator<Item = (Language, &'a str)>,
    ) -> Result<Self, toml::de::Error> {
        let mut parsed = HashMap::new();
        for (language, contents) in tables {
            let table: BTreeMap<String, String> = toml::from_str(contents)?;
            parsed.insert(language, table);
        }
        Ok(Self { tables: parsed })
    }

    /// Localized text for `key`.
    pub fn lookup(&self, language: Language, key: MessageKey) -> &str {
        self.get(language, key)
            .or_else(|| self.get(Language::English, key))
            .unwrap_or_else(|| key.as_str())
    }

    /// Keys with no entry for `language`.
    pub fn missing_keys(&self, language: Language) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| self.get(language, *key).is_none())
            .collect()
    }

    fn get(&self, language: Language, key: MessageKey) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key.as_str()))
            .map(String::as_str)
    }
}
