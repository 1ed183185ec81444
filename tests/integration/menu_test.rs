//! Integration tests driving the text menu from scripted input.

use std::io::Cursor;

use gymtrack::menu::Menu;
use gymtrack::{AppConfig, Gym};
use tempfile::TempDir;

fn run_script(gym: &mut Gym, script: &str) -> String {
    let mut output = Vec::new();
    Menu::new(gym, Cursor::new(script.to_string()), &mut output, "Basic")
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_register_and_show_member() {
    let dir = TempDir::new().unwrap();
    let mut gym = Gym::open(&AppConfig::with_data_dir(dir.path()));

    let out = run_script(&mut gym, "1\nAnn\n30\n\n4\n1\n8\n");

    assert!(out.contains("Member registered successfully with ID: 1"));
    assert!(out.contains("Membership Type: Basic"));
    assert!(out.contains("Thank you for using Gym Management System!"));
    assert_eq!(gym.member(1).unwrap().name, "Ann");
}

#[test]
fn test_invalid_input_reprompts() {
    let dir = TempDir::new().unwrap();
    let mut gym = Gym::open(&AppConfig::with_data_dir(dir.path()));

    let out = run_script(&mut gym, "42\n1\n\nBo\nold\n200\n41\nVIP\n8\n");

    assert!(out.contains("Invalid choice. Please try again."));
    assert!(out.contains("Invalid name. Please try again."));
    assert_eq!(out.matches("Invalid age (1-120). Please try again.").count(), 2);
    assert_eq!(gym.member(1).unwrap().membership_type, "VIP");
}

#[test]
fn test_bmi_and_workout_flow() {
    let dir = TempDir::new().unwrap();
    let mut gym = Gym::open(&AppConfig::with_data_dir(dir.path()));
    gym.register_member("Ann", 30, "Basic").unwrap();

    let out = run_script(
        &mut gym,
        "3\n1\n1.70\n65\n2\n1\nSquat\n3\n2\n9999\nSquat\n3\n6\n1\n6\n9999\n8\n",
    );

    assert!(out.contains("BMI: 22.49 (Normal weight)"));
    assert!(out.contains("Workout recorded successfully with ID: 1"));
    assert!(out.contains("Error: Member not found with ID: 9999"));
    assert!(out.contains("Exercise: Squat"));
    assert!(out.contains("No workout history found."));
    assert_eq!(gym.workouts().len(), 1);
}

#[test]
fn test_toggle_status() {
    let dir = TempDir::new().unwrap();
    let mut gym = Gym::open(&AppConfig::with_data_dir(dir.path()));
    gym.register_member("Ann", 30, "Basic").unwrap();

    let out = run_script(&mut gym, "7\n1\n7\n1\n7\n5\n8\n");

    assert!(out.contains("Member 1 is now Inactive"));
    assert!(out.contains("Member 1 is now Active"));
    assert!(out.contains("Error: Member not found with ID: 5"));
    assert!(gym.member(1).unwrap().is_active());
}

#[test]
fn test_end_of_input_stops_quietly() {
    let dir = TempDir::new().unwrap();
    let mut gym = Gym::open(&AppConfig::with_data_dir(dir.path()));

    let out = run_script(&mut gym, "5\n1\nAnn\n");

    assert!(out.contains("No members registered."));
    assert!(!out.contains("Thank you"));
    assert!(gym.members().is_empty());
}
