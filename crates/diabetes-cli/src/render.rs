//! Terminal rendering of prediction results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::{Serialize, Serializer};

use diabetes_model::{BmiAssessment, FeatureName, FeatureVector, Prediction, SeverityTier};

use crate::messages::{Language, MessageKey, Translations};

/// Everything produced for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub prediction: Prediction,
    pub bmi: BmiAssessment,
    /// Serialized as column name to value, in canonical order.
    #[serde(serialize_with = "serialize_features")]
    pub features: FeatureVector,
}

fn serialize_features<S: Serializer>(
    features: &FeatureVector,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        FeatureName::CANONICAL_ORDER
            .into_iter()
            .map(|name| (name.as_str(), features.get(name))),
    )
}

/// Localized strings for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportText {
    pub app_title: String,
    pub app_tagline: String,
    pub title: String,
    pub bmi_label: String,
    pub bmi_category: String,
    pub headline: String,
    pub detail: String,
    pub advice: String,
    pub disclaimer: String,
}

impl ReportText {
    pub fn new(translations: &Translations, language: Language, report: &PredictionReport) -> Self {
        let text = |key| translations.lookup(language, key).to_string();
        let [headline, detail, advice] = MessageKey::for_prediction(report.prediction);
        Self {
            app_title: text(MessageKey::AppTitle),
            app_tagline: text(MessageKey::AppTagline),
            title: text(MessageKey::ResultTitle),
            bmi_label: text(MessageKey::BmiLabel),
            bmi_category: text(MessageKey::for_category(report.bmi.category)),
            headline: text(headline),
            detail: text(detail),
            advice: text(advice),
            disclaimer: text(MessageKey::Disclaimer),
        }
    }
}

/// BMI value with two decimals, as the form displays it.
pub fn format_bmi(bmi: &BmiAssessment) -> String {
    format!("{:.2}", bmi.rounded())
}

pub fn print_report(report: &PredictionReport, text: &ReportText) {
    println!("{}", text.app_title);
    println!("{}", text.app_tagline);
    println!();
    println!("{}", text.title);
    println!("{}", result_table(report, text));
    println!("{}", text.disclaimer);
}

pub fn print_bmi(bmi: &BmiAssessment, translations: &Translations, language: Language) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        label_cell(translations.lookup(language, MessageKey::BmiLabel)),
        Cell::new(format_bmi(bmi)).set_alignment(CellAlignment::Right),
        tier_cell(
            translations.lookup(language, MessageKey::for_category(bmi.category)),
            bmi.tier,
        ),
        dim_cell(bmi.scheme),
    ]);
    println!("{table}");
}

/// BMI row plus the prediction headline, detail and advice.
pub fn result_table(report: &PredictionReport, text: &ReportText) -> Table {
    let mut table = Table::new();
    apply_result_table_style(&mut table);
    table.add_row(vec![
        label_cell(&text.bmi_label),
        Cell::new(format_bmi(&report.bmi)),
    ]);
    table.add_row(vec![
        dim_cell(report.bmi.scheme),
        tier_cell(&text.bmi_category, report.bmi.tier),
    ]);
    table.add_row(vec![
        dim_cell("→"),
        prediction_cell(&text.headline, report.prediction),
    ]);
    table.add_row(vec![dim_cell(""), Cell::new(&text.detail)]);
    table.add_row(vec![dim_cell(""), Cell::new(&text.advice).fg(Color::DarkGrey)]);
    table
}

/// Canonical feature order, optionally with the values of one vector.
pub fn features_table(values: Option<&FeatureVector>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#"), header_cell("Feature"), header_cell("Source")];
    if values.is_some() {
        header.push(header_cell("Value"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for name in FeatureName::CANONICAL_ORDER {
        let mut row = vec![
            dim_cell(name.position()),
            Cell::new(name.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(name.description()),
        ];
        if let Some(vector) = values {
            row.push(Cell::new(format_feature(vector.get(name))));
        }
        table.add_row(row);
    }
    table
}

fn format_feature(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub fn tier_color(tier: SeverityTier) -> Color {
    match tier {
        SeverityTier::Normal => Color::Green,
        SeverityTier::Caution => Color::Yellow,
        SeverityTier::Risk => Color::Red,
    }
}

pub fn prediction_color(prediction: Prediction) -> Color {
    match prediction {
        Prediction::Diabetic => Color::Red,
        Prediction::NonDiabetic => Color::Green,
    }
}

fn tier_cell(label: &str, tier: SeverityTier) -> Cell {
    Cell::new(label)
        .fg(tier_color(tier))
        .add_attribute(Attribute::Bold)
}

fn prediction_cell(label: &str, prediction: Prediction) -> Cell {
    Cell::new(label)
        .fg(prediction_color(prediction))
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_result_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
