//! Turns a raw form submission into the classifier's feature vector.
//!
//! Fields are checked in the order the form presents them (sex, age, weight,
//! height, the ten condition questions, then the three ratings) and the
//! first problem is returned. Nothing is defaulted except the constant
//! fields from [`ConstantFields`](crate::config::ConstantFields).

use diabetes_model::{
    AssembleError, BmiAssessment, ConditionFlag, FEATURE_COUNT, FeatureName, FeatureVector,
    InputField, RawInput, Sex, YesNo,
};
use tracing::debug;

use crate::bmi::{classify_bmi, compute_bmi};
use crate::config::{AssemblerConfig, FloatRange, IntRange};

/// Validated submission: the feature vector plus what the form displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssembledSubmission {
    pub features: FeatureVector,
    pub bmi: BmiAssessment,
    pub sex: Sex,
}

/// Builds feature vectors according to an [`AssemblerConfig`].
#[derive(Debug, Clone, Default)]
pub struct FeatureAssembler {
    config: AssemblerConfig,
}

impl FeatureAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Validates `raw` and returns the 19 classifier inputs in canonical order.
    ///
    /// # Errors
    ///
    /// - [`AssembleError::IncompleteInput`] when a field is absent.
    /// - [`AssembleError::Validation`] when a value is out of range or not an
    ///   allowed category.
    /// - [`AssembleError::Derivation`] when BMI cannot be computed.
    pub fn assemble(&self, raw: &RawInput) -> Result<FeatureVector, AssembleError> {
        self.prepare(raw).map(|submission| submission.features)
    }

    /// Like [`assemble`](Self::assemble), also returning the BMI assessment
    /// shown next to the result.
    pub fn prepare(&self, raw: &RawInput) -> Result<AssembledSubmission, AssembleError> {
        let result = self.build(raw);
        match &result {
            Ok(submission) => debug!(
                feature_count = submission.features.len(),
                bmi_scheme = %submission.bmi.scheme,
                "assembled feature vector"
            ),
            Err(error) => debug!(
                field = error.field().map(|field| field.as_str()).unwrap_or("-"),
                "rejected submission"
            ),
        }
        result
    }

    /// Validates weight and height against the form limits and returns the
    /// BMI assessment the form would show for them.
    ///
    /// # Errors
    ///
    /// Same weight and height errors as [`assemble`](Self::assemble):
    /// out-of-range or off-grid values are [`AssembleError::Validation`].
    pub fn measure_bmi(
        &self,
        weight_kg: f64,
        height_ft: f64,
        sex: Option<Sex>,
    ) -> Result<BmiAssessment, AssembleError> {
        let (weight_kg, height_ft) = self.check_body(Some(weight_kg), Some(height_ft))?;
        let bmi = compute_bmi(weight_kg, height_ft)?;
        Ok(classify_bmi(bmi, sex, self.config.bmi_scheme))
    }

    fn check_body(
        &self,
        weight_kg: Option<f64>,
        height_ft: Option<f64>,
    ) -> Result<(f64, f64), AssembleError> {
        let limits = &self.config.limits;
        let weight_kg = check_float(InputField::Weight, weight_kg, limits.weight_kg)?;
        let height_ft = check_float(InputField::Height, height_ft, limits.height_ft)?;
        if !limits.is_on_height_grid(height_ft) {
            return Err(AssembleError::validation(
                InputField::Height,
                format!(
                    "{height_ft} is not one of the offered heights ({} ft steps)",
                    limits.height_step_ft
                ),
            ));
        }
        Ok((weight_kg, height_ft))
    }

    fn build(&self, raw: &RawInput) -> Result<AssembledSubmission, AssembleError> {
        let limits = &self.config.limits;

        let sex: Sex = parse_category(InputField::Sex, raw.sex.as_deref())?;
        let age = check_int(InputField::Age, raw.age, limits.age)?;
        let (weight_kg, height_ft) = self.check_body(raw.weight_kg, raw.height_ft)?;

        let mut answers = [0.0; ConditionFlag::ALL.len()];
        for flag in ConditionFlag::ALL {
            let parsed: YesNo = parse_category(InputField::Condition(flag), raw.condition(flag))?;
            answers[flag.index()] = parsed.code();
        }
        let answer = |flag: ConditionFlag| answers[flag.index()];

        let gen_hlth = check_int(InputField::GenHlth, raw.gen_hlth, limits.gen_hlth)?;
        let ment_hlth = check_int(InputField::MentHlth, raw.ment_hlth, limits.health_days)?;
        let phys_hlth = check_int(InputField::PhysHlth, raw.phys_hlth, limits.health_days)?;

        let bmi = compute_bmi(weight_kg, height_ft)?;
        let constants = &self.config.constants;

        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FeatureName::CANONICAL_ORDER) {
            *slot = match name {
                FeatureName::HighBp => answer(ConditionFlag::HighBp),
                FeatureName::HighChol => answer(ConditionFlag::HighChol),
                FeatureName::CholCheck => flag_code(constants.chol_check),
                FeatureName::Bmi => bmi,
                FeatureName::Smoker => answer(ConditionFlag::Smoker),
                FeatureName::Stroke => answer(ConditionFlag::Stroke),
                FeatureName::HeartDiseaseOrAttack => answer(ConditionFlag::HeartDiseaseOrAttack),
                FeatureName::PhysActivity => answer(ConditionFlag::PhysActivity),
                FeatureName::Fruits => answer(ConditionFlag::Fruits),
                FeatureName::Veggies => answer(ConditionFlag::Veggies),
                FeatureName::HvyAlcoholConsump => answer(ConditionFlag::HvyAlcoholConsump),
                FeatureName::AnyHealthcare => flag_code(constants.any_healthcare),
                FeatureName::NoDocBcCost => flag_code(constants.no_doc_bc_cost),
                FeatureName::GenHlth => gen_hlth as f64,
                FeatureName::MentHlth => ment_hlth as f64,
                FeatureName::PhysHlth => phys_hlth as f64,
                FeatureName::DiffWalk => answer(ConditionFlag::DiffWalk),
                FeatureName::Sex => sex.code(),
                FeatureName::Age => age as f64,
            };
        }

        Ok(AssembledSubmission {
            features: FeatureVector::from_ordered(values),
            bmi: classify_bmi(bmi, Some(sex), self.config.bmi_scheme),
            sex,
        })
    }
}

fn flag_code(value: bool) -> f64 {
    YesNo::from(value).code()
}

fn parse_category<T>(field: InputField, value: Option<&str>) -> Result<T, AssembleError>
where
    T: std::str::FromStr<Err = String>,
{
    let value = value.ok_or(AssembleError::IncompleteInput { field })?;
    value
        .parse::<T>()
        .map_err(|reason| AssembleError::validation(field, reason))
}

fn check_int(field: InputField, value: Option<i64>, range: IntRange) -> Result<i64, AssembleError> {
    let value = value.ok_or(AssembleError::IncompleteInput { field })?;
    if !range.contains(value) {
        return Err(AssembleError::validation(
            field,
            format!("{value} is outside {}..={}", range.min, range.max),
        ));
    }
    Ok(value)
}

fn check_float(
    field: InputField,
    value: Option<f64>,
    range: FloatRange,
) -> Result<f64, AssembleError> {
    let value = value.ok_or(AssembleError::IncompleteInput { field })?;
    if !value.is_finite() {
        return Err(AssembleError::validation(field, "must be a finite number"));
    }
    if !range.contains(value) {
        return Err(AssembleError::validation(
            field,
            format!("{value} is outside {}..={}", range.min, range.max),
        ));
    }
    Ok(value)
}
