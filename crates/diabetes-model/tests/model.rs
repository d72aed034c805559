//! Tests for diabetes-model types.

use diabetes_model::{
    AssembleError, ConditionFlag, FEATURE_COUNT, FeatureName, FeatureVector, InputField,
    Prediction, RawInput,
};

#[test]
fn raw_input_reads_training_column_names() {
    let json = r#"{
        "Sex": "Male",
        "Age": 45,
        "Weight": 85.0,
        "Height": 5.9,
        "HighBP": "Yes",
        "HeartDiseaseorAttack": "No",
        "GenHlth": 3,
        "MentHlth": 0,
        "PhysHlth": 0
    }"#;
    let input: RawInput = serde_json::from_str(json).expect("parse raw input");

    assert_eq!(input.sex.as_deref(), Some("Male"));
    assert_eq!(input.age, Some(45));
    assert_eq!(input.weight_kg, Some(85.0));
    assert_eq!(input.height_ft, Some(5.9));
    assert_eq!(input.condition(ConditionFlag::HighBp), Some("Yes"));
    assert_eq!(
        input.condition(ConditionFlag::HeartDiseaseOrAttack),
        Some("No")
    );
    assert_eq!(input.condition(ConditionFlag::Smoker), None);
    assert_eq!(input.gen_hlth, Some(3));
}

#[test]
fn raw_input_skips_absent_fields_when_serialized() {
    let input = RawInput::new().with_age(52);
    let json = serde_json::to_string(&input).expect("serialize raw input");
    assert_eq!(json, r#"{"Age":52}"#);
}

#[test]
fn feature_vector_iterates_in_canonical_order() {
    let mut values = [0.0; FEATURE_COUNT];
    for (index, value) in values.iter_mut().enumerate() {
        *value = index as f64;
    }
    let vector = FeatureVector::from_ordered(values);

    let names: Vec<&str> = vector.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "HighBP",
            "HighChol",
            "CholCheck",
            "BMI",
            "Smoker",
            "Stroke",
            "HeartDiseaseorAttack",
            "PhysActivity",
            "Fruits",
            "Veggies",
            "HvyAlcoholConsump",
            "AnyHealthcare",
            "NoDocbcCost",
            "GenHlth",
            "MentHlth",
            "PhysHlth",
            "DiffWalk",
            "Sex",
            "Age",
        ]
    );
    for (index, (name, value)) in vector.iter().enumerate() {
        assert_eq!(name.position(), index);
        assert_eq!(value, index as f64);
    }
}

#[test]
fn feature_vector_serializes_as_values() {
    let vector = FeatureVector::from_ordered([1.0; FEATURE_COUNT]);
    let json = serde_json::to_string(&vector).expect("serialize vector");
    let round: FeatureVector = serde_json::from_str(&json).expect("deserialize vector");
    assert_eq!(round, vector);
    assert_eq!(round.get(FeatureName::Age), 1.0);
}

#[test]
fn prediction_labels() {
    assert_eq!(Prediction::from_label(0), Some(Prediction::NonDiabetic));
    assert_eq!(Prediction::from_label(1), Some(Prediction::Diabetic));
    assert_eq!(Prediction::from_label(2), None);
    assert!(Prediction::Diabetic.is_diabetic());
    assert_eq!(Prediction::NonDiabetic.to_string(), "Non-Diabetic");
}

#[test]
fn assemble_error_names_field() {
    let error = AssembleError::validation(InputField::Age, "must be between 10 and 100");
    assert_eq!(error.field(), Some(InputField::Age));
    assert_eq!(error.to_string(), "invalid Age: must be between 10 and 100");

    let missing = AssembleError::IncompleteInput {
        field: InputField::Condition(ConditionFlag::DiffWalk),
    };
    assert_eq!(missing.to_string(), "missing required field: DiffWalk");
}
