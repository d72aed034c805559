//! Type-safe enumerations for form categories.
//!
//! The form presents these as labelled choices ("Male"/"Female",
//! "Yes"/"No"). Parsing is case-insensitive and ignores surrounding
//! whitespace; the numeric codes are what the classifier was trained on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex as collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Returns the label shown in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    /// Numeric code used in the feature vector (Female = 0, Male = 1).
    pub fn code(&self) -> f64 {
        match self {
            Sex::Female => 0.0,
            Sex::Male => 1.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(format!("expected Male or Female, got {s:?}")),
        }
    }
}

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    /// Numeric code used in the feature vector (Yes = 1, No = 0).
    pub fn code(&self) -> f64 {
        match self {
            YesNo::Yes => 1.0,
            YesNo::No => 0.0,
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" => Ok(YesNo::Yes),
            "NO" => Ok(YesNo::No),
            _ => Err(format!("expected Yes or No, got {s:?}")),
        }
    }
}

/// The ten lifestyle and condition questions answered with Yes/No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConditionFlag {
    HighBp,
    HighChol,
    Smoker,
    Stroke,
    HeartDiseaseOrAttack,
    PhysActivity,
    Fruits,
    Veggies,
    HvyAlcoholConsump,
    DiffWalk,
}

impl ConditionFlag {
    /// All flags in the order the form asks them.
    pub const ALL: [ConditionFlag; 10] = [
        ConditionFlag::HighBp,
        ConditionFlag::HighChol,
        ConditionFlag::Smoker,
        ConditionFlag::Stroke,
        ConditionFlag::HeartDiseaseOrAttack,
        ConditionFlag::PhysActivity,
        ConditionFlag::Fruits,
        ConditionFlag::Veggies,
        ConditionFlag::HvyAlcoholConsump,
        ConditionFlag::DiffWalk,
    ];

    /// Position of this flag in [`ConditionFlag::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Column name the classifier was trained with.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionFlag::HighBp => "HighBP",
            ConditionFlag::HighChol => "HighChol",
            ConditionFlag::Smoker => "Smoker",
            ConditionFlag::Stroke => "Stroke",
            ConditionFlag::HeartDiseaseOrAttack => "HeartDiseaseorAttack",
            ConditionFlag::PhysActivity => "PhysActivity",
            ConditionFlag::Fruits => "Fruits",
            ConditionFlag::Veggies => "Veggies",
            ConditionFlag::HvyAlcoholConsump => "HvyAlcoholConsump",
            ConditionFlag::DiffWalk => "DiffWalk",
        }
    }

    /// Question label shown next to the toggle.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionFlag::HighBp => "High Blood Pressure",
            ConditionFlag::HighChol => "High Cholesterol",
            ConditionFlag::Smoker => "Smoker",
            ConditionFlag::Stroke => "History of Stroke",
            ConditionFlag::HeartDiseaseOrAttack => "Heart Disease or Heart Attack",
            ConditionFlag::PhysActivity => "Physically Active",
            ConditionFlag::Fruits => "Consumes Fruits Regularly",
            ConditionFlag::Veggies => "Consumes Vegetables Regularly",
            ConditionFlag::HvyAlcoholConsump => "Heavy Alcohol Consumption",
            ConditionFlag::DiffWalk => "Difficulty Walking",
        }
    }
}

impl fmt::Display for ConditionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw form field, used to name the culprit in input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Sex,
    Age,
    Weight,
    Height,
    Condition(ConditionFlag),
    GenHlth,
    MentHlth,
    PhysHlth,
}

impl InputField {
    /// Name of the field as it appears in input snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Sex => "Sex",
            InputField::Age => "Age",
            InputField::Weight => "Weight",
            InputField::Height => "Height",
            InputField::Condition(flag) => flag.as_str(),
            InputField::GenHlth => "GenHlth",
            InputField::MentHlth => "MentHlth",
            InputField::PhysHlth => "PhysHlth",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" female ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_yes_no_codes() {
        assert_eq!("YES".parse::<YesNo>().unwrap().code(), 1.0);
        assert_eq!("no".parse::<YesNo>().unwrap().code(), 0.0);
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn test_condition_flag_index_matches_form_order() {
        for (position, flag) in ConditionFlag::ALL.iter().enumerate() {
            assert_eq!(flag.index(), position, "{flag:?}");
        }
    }

    #[test]
    fn test_condition_flag_names() {
        assert_eq!(ConditionFlag::HighBp.as_str(), "HighBP");
        assert_eq!(
            InputField::Condition(ConditionFlag::HeartDiseaseOrAttack).to_string(),
            "HeartDiseaseorAttack"
        );
    }
}
