//! Unit tests for BMI computation and classification.

use gymtrack::members::{calculate_bmi, BmiStatus, Member};

fn member() -> Member {
    Member::new(1, "Ann".to_string(), 30, "Basic".to_string())
}

#[test]
fn test_bmi_matches_formula() {
    let pairs = [
        (1.50, 40.0),
        (1.62, 55.5),
        (1.70, 65.0),
        (1.75, 80.0),
        (1.80, 99.0),
        (1.95, 130.0),
        (2.10, 72.0),
    ];

    for (height, weight) in pairs {
        let mut m = member();
        m.set_height(height);
        m.set_weight(weight);

        let expected = weight / (height * height);
        assert!((m.bmi() - expected).abs() < 1e-9, "{height} m / {weight} kg");
        assert_eq!(m.bmi_status(), BmiStatus::from_bmi(expected));
    }
}

#[test]
fn test_update_order_does_not_matter() {
    let mut weight_first = member();
    weight_first.set_weight(72.0);
    weight_first.set_height(1.8);

    let mut height_first = member();
    height_first.set_height(1.8);
    height_first.set_weight(72.0);

    let mut together = member();
    together.set_measurements(1.8, 72.0);

    assert_eq!(weight_first.bmi(), height_first.bmi());
    assert_eq!(weight_first.bmi(), together.bmi());
}

#[test]
fn test_zero_resets_bmi() {
    let mut m = member();
    m.set_measurements(1.70, 65.0);
    assert!(m.bmi() > 0.0);

    m.set_height(0.0);
    assert_eq!(m.bmi(), 0.0);
    assert_eq!(m.bmi_status(), BmiStatus::Underweight);

    m.set_height(1.70);
    assert!((m.bmi() - 22.49).abs() < 0.01);
}

#[test]
fn test_calculate_bmi_guards_non_positive() {
    assert_eq!(calculate_bmi(0.0, 70.0), 0.0);
    assert_eq!(calculate_bmi(1.8, 0.0), 0.0);
    assert_eq!(calculate_bmi(-1.8, 70.0), 0.0);
    assert_eq!(calculate_bmi(1.8, -70.0), 0.0);
}

#[test]
fn test_status_labels() {
    let mut m = member();

    m.set_measurements(1.80, 55.0);
    assert_eq!(m.bmi_status().to_string(), "Underweight");

    m.set_measurements(1.80, 70.0);
    assert_eq!(m.bmi_status().to_string(), "Normal weight");

    m.set_measurements(1.80, 90.0);
    assert_eq!(m.bmi_status().to_string(), "Overweight");

    m.set_measurements(1.80, 110.0);
    assert_eq!(m.bmi_status().to_string(), "Obese");
}
