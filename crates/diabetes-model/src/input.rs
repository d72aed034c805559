//! Raw form input captured at submission time.

use serde::{Deserialize, Serialize};

use crate::enums::ConditionFlag;

/// Snapshot of everything the user entered, before validation.
///
/// Every field is optional so that an absent value can be reported instead
/// of silently defaulted. Keys follow the training column names, so a
/// snapshot serialized to JSON reads like one row of the training data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(rename = "Sex", default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(rename = "Age", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// Weight in kilograms.
    #[serde(rename = "Weight", default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in feet, selected in 0.1 steps.
    #[serde(rename = "Height", default, skip_serializing_if = "Option::is_none")]
    pub height_ft: Option<f64>,
    #[serde(rename = "HighBP", default, skip_serializing_if = "Option::is_none")]
    pub high_bp: Option<String>,
    #[serde(rename = "HighChol", default, skip_serializing_if = "Option::is_none")]
    pub high_chol: Option<String>,
    #[serde(rename = "Smoker", default, skip_serializing_if = "Option::is_none")]
    pub smoker: Option<String>,
    #[serde(rename = "Stroke", default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(
        rename = "HeartDiseaseorAttack",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub heart_disease_or_attack: Option<String>,
    #[serde(rename = "PhysActivity", default, skip_serializing_if = "Option::is_none")]
    pub phys_activity: Option<String>,
    #[serde(rename = "Fruits", default, skip_serializing_if = "Option::is_none")]
    pub fruits: Option<String>,
    #[serde(rename = "Veggies", default, skip_serializing_if = "Option::is_none")]
    pub veggies: Option<String>,
    #[serde(
        rename = "HvyAlcoholConsump",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hvy_alcohol_consump: Option<String>,
    #[serde(rename = "DiffWalk", default, skip_serializing_if = "Option::is_none")]
    pub diff_walk: Option<String>,
    /// General health, 1 (excellent) to 5 (poor).
    #[serde(rename = "GenHlth", default, skip_serializing_if = "Option::is_none")]
    pub gen_hlth: Option<i64>,
    /// Days of poor mental health in the past month.
    #[serde(rename = "MentHlth", default, skip_serializing_if = "Option::is_none")]
    pub ment_hlth: Option<i64>,
    /// Days of poor physical health in the past month.
    #[serde(rename = "PhysHlth", default, skip_serializing_if = "Option::is_none")]
    pub phys_hlth: Option<i64>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer recorded for a condition question.
    pub fn condition(&self, flag: ConditionFlag) -> Option<&str> {
        self.condition_slot(flag).as_deref()
    }

    /// Records the answer to a condition question.
    pub fn set_condition(&mut self, flag: ConditionFlag, answer: impl Into<String>) {
        *self.condition_slot_mut(flag) = Some(answer.into());
    }

    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    #[must_use]
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    #[must_use]
    pub fn with_height_ft(mut self, height_ft: f64) -> Self {
        self.height_ft = Some(height_ft);
        self
    }

    #[must_use]
    pub fn with_condition(mut self, flag: ConditionFlag, answer: impl Into<String>) -> Self {
        self.set_condition(flag, answer);
        self
    }

    /// Sets general health, mental-health days and physical-health days.
    #[must_use]
    pub fn with_ratings(mut self, gen_hlth: i64, ment_hlth: i64, phys_hlth: i64) -> Self {
        self.gen_hlth = Some(gen_hlth);
        self.ment_hlth = Some(ment_hlth);
        self.phys_hlth = Some(phys_hlth);
        self
    }

    /// Overlays every field present in `other` onto `self`.
    pub fn merge(&mut self, mut other: RawInput) {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        for flag in ConditionFlag::ALL {
            let value = other.condition_slot_mut(flag).take();
            take(self.condition_slot_mut(flag), value);
        }
        take(&mut self.sex, other.sex);
        take(&mut self.age, other.age);
        take(&mut self.weight_kg, other.weight_kg);
        take(&mut self.height_ft, other.height_ft);
        take(&mut self.gen_hlth, other.gen_hlth);
        take(&mut self.ment_hlth, other.ment_hlth);
        take(&mut self.phys_hlth, other.phys_hlth);
    }

    fn condition_slot(&self, flag: ConditionFlag) -> &Option<String> {
        match flag {
            ConditionFlag::HighBp => &self.high_bp,
            ConditionFlag::HighChol => &self.high_chol,
            ConditionFlag::Smoker => &self.smoker,
            ConditionFlag::Stroke => &self.stroke,
            ConditionFlag::HeartDiseaseOrAttack => &self.heart_disease_or_attack,
            ConditionFlag::PhysActivity => &self.phys_activity,
            ConditionFlag::Fruits => &self.fruits,
            ConditionFlag::Veggies => &self.veggies,
            ConditionFlag::HvyAlcoholConsump => &self.hvy_alcohol_consump,
            ConditionFlag::DiffWalk => &self.diff_walk,
        }
    }

    fn condition_slot_mut(&mut self, flag: ConditionFlag) -> &mut Option<String> {
        match flag {
            ConditionFlag::HighBp => &mut self.high_bp,
            ConditionFlag::HighChol => &mut self.high_chol,
            ConditionFlag::Smoker => &mut self.smoker,
            ConditionFlag::Stroke => &mut self.stroke,
            ConditionFlag::HeartDiseaseOrAttack => &mut self.heart_disease_or_attack,
            ConditionFlag::PhysActivity => &mut self.phys_activity,
            ConditionFlag::Fruits => &mut self.fruits,
            ConditionFlag::Veggies => &mut self.veggies,
            ConditionFlag::HvyAlcoholConsump => &mut self.hvy_alcohol_consump,
            ConditionFlag::DiffWalk => &mut self.diff_walk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_accessors_cover_every_flag() {
        let mut input = RawInput::new();
        for flag in ConditionFlag::ALL {
            assert!(input.condition(flag).is_none());
            input.set_condition(flag, flag.as_str());
        }
        for flag in ConditionFlag::ALL {
            assert_eq!(input.condition(flag), Some(flag.as_str()));
        }
    }

    #[test]
    fn merge_keeps_fields_missing_from_overlay() {
        let mut base = RawInput::new()
            .with_sex("Female")
            .with_age(30)
            .with_condition(ConditionFlag::Smoker, "No");
        let overlay = RawInput::new()
            .with_age(31)
            .with_condition(ConditionFlag::Smoker, "Yes");
        base.merge(overlay);
        assert_eq!(base.sex.as_deref(), Some("Female"));
        assert_eq!(base.age, Some(31));
        assert_eq!(base.condition(ConditionFlag::Smoker), Some("Yes"));
    }
}
