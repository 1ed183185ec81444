//! End-to-end test of a gym session across a restart.

use std::fs;

use gymtrack::{AppConfig, BmiStatus, Gym};
use tempfile::TempDir;

#[test]
fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::with_data_dir(dir.path());

    let (member_before, workout_before) = {
        let mut gym = Gym::open(&config);

        let ann = gym.register_member("Ann", 30, "Basic").unwrap();
        assert_eq!(ann, 1);

        gym.set_height(ann, 1.70).unwrap();
        gym.set_weight(ann, 65.0).unwrap();
        let member = gym.member(ann).unwrap();
        assert!((member.bmi() - 22.49).abs() < 0.01);
        assert_eq!(member.bmi_status(), BmiStatus::NormalWeight);

        let workout = gym.record_workout(ann, "Squat", 3).unwrap();

        let workouts_file = fs::read_to_string(config.workouts_path()).unwrap();
        let err = gym.record_workout(9999, "Squat", 3).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs::read_to_string(config.workouts_path()).unwrap(), workouts_file);
        assert_eq!(gym.workouts().len(), 1);

        (
            gym.member(ann).unwrap().clone(),
            gym.workouts().get(workout).unwrap().clone(),
        )
    };

    let gym = Gym::open(&config);

    assert_eq!(gym.list_members(), vec![member_before.clone()]);
    assert_eq!(gym.member(1).unwrap(), &member_before);
    assert_eq!(gym.workout_history(1), Some(vec![workout_before]));
    assert!(gym.member_info(1).unwrap().contains("BMI: 22.49 (Normal weight)"));
}

#[test]
fn test_history_sentinel_for_unknown_member() {
    let dir = TempDir::new().unwrap();
    let mut gym = Gym::open(&AppConfig::with_data_dir(dir.path()));
    gym.register_member("Ann", 30, "Basic").unwrap();

    assert_eq!(gym.workout_history(1), None);
    assert_eq!(gym.workouts().render_history(1), gymtrack::workouts::NO_HISTORY);
}
