//! BMI derivation and banding.
//!
//! BMI is weight in kilograms over height in metres squared. The form takes
//! height in feet, so the conversion factor is part of the derivation.
//!
//! Two banding policies are supported (see [`BmiScheme`]). Both are total
//! step functions over positive BMI values; every value lands in exactly one
//! band.

use diabetes_model::{AssembleError, BmiAssessment, BmiCategory, BmiScheme, Sex, SeverityTier};

/// Metres per foot.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Clinical band edges: lower bounds of Normal, Overweight and Obese.
pub const CLINICAL_NORMAL_MIN: f64 = 18.5;
pub const CLINICAL_OVERWEIGHT_MIN: f64 = 25.0;
pub const CLINICAL_OBESE_MIN: f64 = 30.0;

/// Sex-specific band edges.
struct SexBands {
    /// Lower bound of Normal.
    normal_min: f64,
    /// Upper bound (inclusive) of Normal.
    normal_max: f64,
    /// Lower bound of Slightly overweight.
    slightly_min: f64,
    /// Upper bound (inclusive) of Slightly overweight.
    slightly_max: f64,
}

const MALE_BANDS: SexBands = SexBands {
    normal_min: 20.7,
    normal_max: 26.4,
    slightly_min: 26.5,
    slightly_max: 27.8,
};

const FEMALE_BANDS: SexBands = SexBands {
    normal_min: 19.1,
    normal_max: 25.8,
    slightly_min: 25.9,
    slightly_max: 27.3,
};

/// Converts feet to metres.
pub fn feet_to_meters(height_ft: f64) -> f64 {
    height_ft * FEET_TO_METERS
}

/// Computes BMI from kilograms and feet.
///
/// # Errors
///
/// Returns [`AssembleError::Derivation`] when the converted height is not
/// positive or the result is not a finite positive number.
pub fn compute_bmi(weight_kg: f64, height_ft: f64) -> Result<f64, AssembleError> {
    let height_m = feet_to_meters(height_ft);
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(AssembleError::Derivation {
            derived: "BMI",
            reason: format!("height must be positive, got {height_m} m"),
        });
    }
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(AssembleError::Derivation {
            derived: "BMI",
            reason: format!("result {bmi} is not a positive number"),
        });
    }
    Ok(bmi)
}

/// Assigns a BMI band and display tier.
///
/// `bmi` is expected to be positive. Under [`BmiScheme::SexSpecific`] an
/// unknown sex falls back to the clinical bands; the returned assessment
/// records the scheme that was actually applied.
pub fn classify_bmi(bmi: f64, sex: Option<Sex>, scheme: BmiScheme) -> BmiAssessment {
    let (category, tier, applied) = match (scheme, sex) {
        (BmiScheme::SexSpecific, Some(sex)) => {
            let (category, tier) = sex_specific(bmi, sex);
            (category, tier, BmiScheme::SexSpecific)
        }
        _ => {
            let (category, tier) = clinical(bmi);
            (category, tier, BmiScheme::Clinical)
        }
    };
    BmiAssessment {
        bmi,
        category,
        tier,
        scheme: applied,
    }
}

fn clinical(bmi: f64) -> (BmiCategory, SeverityTier) {
    if bmi < CLINICAL_NORMAL_MIN {
        (BmiCategory::Underweight, SeverityTier::Caution)
    } else if bmi < CLINICAL_OVERWEIGHT_MIN {
        (BmiCategory::Normal, SeverityTier::Normal)
    } else if bmi < CLINICAL_OBESE_MIN {
        (BmiCategory::Overweight, SeverityTier::Caution)
    } else {
        (BmiCategory::Obese, SeverityTier::Risk)
    }
}

fn sex_specific(bmi: f64, sex: Sex) -> (BmiCategory, SeverityTier) {
    let bands = match sex {
        Sex::Male => &MALE_BANDS,
        Sex::Female => &FEMALE_BANDS,
    };
    // Values between the published bands (26.4..26.5 for men) match none of
    // the named ranges and read as Overweight.
    if bmi < bands.normal_min {
        (BmiCategory::Underweight, SeverityTier::Risk)
    } else if bmi <= bands.normal_max {
        (BmiCategory::Normal, SeverityTier::Normal)
    } else if (bands.slightly_min..=bands.slightly_max).contains(&bmi) {
        (BmiCategory::SlightlyOverweight, SeverityTier::Caution)
    } else {
        (BmiCategory::Overweight, SeverityTier::Risk)
    }
}
