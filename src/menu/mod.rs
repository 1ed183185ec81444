//! Interactive text menu over the gym records.
//!
//! Reads answers from an [`InputPort`] and writes prompts and results to any
//! writer, so the whole menu can be driven from a script or a test. End of
//! input ends the session.

pub mod input;

pub use input::InputPort;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::gym::Gym;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterMember,
    RecordWorkout,
    UpdateMeasurements,
    MemberInfo,
    AllMembers,
    WorkoutHistory,
    ToggleStatus,
    Exit,
}

impl MenuChoice {
    /// All entries in display order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::RegisterMember,
        MenuChoice::RecordWorkout,
        MenuChoice::UpdateMeasurements,
        MenuChoice::MemberInfo,
        MenuChoice::AllMembers,
        MenuChoice::WorkoutHistory,
        MenuChoice::ToggleStatus,
        MenuChoice::Exit,
    ];

    /// Number the user types to pick this entry.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::RegisterMember => "Register New Member",
            MenuChoice::RecordWorkout => "Record Workout",
            MenuChoice::UpdateMeasurements => "Calculate BMI",
            MenuChoice::MemberInfo => "Display Member Information",
            MenuChoice::AllMembers => "Display All Members",
            MenuChoice::WorkoutHistory => "Workout History",
            MenuChoice::ToggleStatus => "Activate/Deactivate Member",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Text front end bound to one gym.
pub struct Menu<'a, R, W> {
    gym: &'a mut Gym,
    input: InputPort<R>,
    output: W,
    default_membership_type: String,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        gym: &'a mut Gym,
        input: R,
        output: W,
        default_membership_type: impl Into<String>,
    ) -> Self {
        Self {
            gym,
            input: InputPort::new(input),
            output,
            default_membership_type: default_membership_type.into(),
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;

            let Some(answer) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let choice = answer.parse().ok().and_then(MenuChoice::from_number);
            let step = match choice {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using Gym Management System!")?;
                    return Ok(());
                }
                Some(choice) => self.handle(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Some(())
                }
            };

            if step.is_none() {
                return Ok(());
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Gym Management System ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Handlers return `Ok(None)` when input ran out mid-dialog.
    fn handle(&mut self, choice: MenuChoice) -> io::Result<Option<()>> {
        match choice {
            MenuChoice::RegisterMember => self.register_member(),
            MenuChoice::RecordWorkout => self.record_workout(),
            MenuChoice::UpdateMeasurements => self.update_measurements(),
            MenuChoice::MemberInfo => self.member_info(),
            MenuChoice::AllMembers => self.all_members(),
            MenuChoice::WorkoutHistory => self.workout_history(),
            MenuChoice::ToggleStatus => self.toggle_status(),
            MenuChoice::Exit => Ok(Some(())),
        }
    }

    fn register_member(&mut self) -> io::Result<Option<()>> {
        let Some(name) = self.prompt_valid("Enter member name: ", "name", non_empty)? else {
            return Ok(None);
        };
        let Some(age) = self.prompt_valid("Enter age: ", "age (1-120)", |s| {
            s.parse::<u32>().ok().filter(|a| (1..=120).contains(a))
        })?
        else {
            return Ok(None);
        };
        let prompt = format!(
            "Enter membership type [{}]: ",
            self.default_membership_type
        );
        let Some(membership_type) = self.prompt(&prompt)? else {
            return Ok(None);
        };
        let membership_type = if membership_type.is_empty() {
            self.default_membership_type.clone()
        } else {
            membership_type
        };

        let result = self.gym.register_member(&name, age, &membership_type);
        self.report(result, |id| {
            format!("Member registered successfully with ID: {id}")
        })?;
        Ok(Some(()))
    }

    fn record_workout(&mut self) -> io::Result<Option<()>> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(None);
        };
        let Some(exercise) = self.prompt_valid("Enter exercise name: ", "exercise", non_empty)?
        else {
            return Ok(None);
        };
        let Some(sets) = self.prompt_valid("Enter number of sets: ", "number of sets", |s| {
            s.parse::<u32>().ok().filter(|n| *n > 0)
        })?
        else {
            return Ok(None);
        };

        let result = self.gym.record_workout(member_id, &exercise, sets);
        self.report(result, |id| {
            format!("Workout recorded successfully with ID: {id}")
        })?;
        Ok(Some(()))
    }

    fn update_measurements(&mut self) -> io::Result<Option<()>> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(None);
        };
        if let Err(e) = self.gym.member(member_id) {
            writeln!(self.output, "Error: {e}")?;
            return Ok(Some(()));
        }

        let Some(height) = self.prompt_valid("Enter height (m): ", "height", positive)? else {
            return Ok(None);
        };
        let Some(weight) = self.prompt_valid("Enter weight (kg): ", "weight", positive)? else {
            return Ok(None);
        };

        let result = self
            .gym
            .members_mut()
            .set_measurements(member_id, height, weight)
            .and_then(|_| self.gym.member(member_id))
            .map(|m| format!("BMI: {:.2} ({})", m.bmi(), m.bmi_status()));
        self.report(result, |summary| summary)?;
        Ok(Some(()))
    }

    fn member_info(&mut self) -> io::Result<Option<()>> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(None);
        };
        let result = self.gym.member_info(member_id);
        self.report(result, |info| info)?;
        Ok(Some(()))
    }

    fn all_members(&mut self) -> io::Result<Option<()>> {
        if self.gym.members().is_empty() {
            writeln!(self.output, "No members registered.")?;
        } else {
            let all = self.gym.members().render_all();
            write!(self.output, "{all}")?;
        }
        Ok(Some(()))
    }

    fn workout_history(&mut self) -> io::Result<Option<()>> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(None);
        };
        let history = self.gym.workouts().render_history(member_id);
        writeln!(self.output, "{history}")?;
        Ok(Some(()))
    }

    fn toggle_status(&mut self) -> io::Result<Option<()>> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(None);
        };

        let active = self.gym.member(member_id).map(|m| m.is_active());
        let result = match active {
            Ok(true) => self.gym.members_mut().deactivate(member_id),
            Ok(false) => self.gym.members_mut().activate(member_id),
            Err(e) => Err(e),
        }
        .and_then(|_| self.gym.member(member_id))
        .map(|m| format!("Member {} is now {}", m.id(), m.status));

        self.report(result, |summary| summary)?;
        Ok(Some(()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(self.input.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Prompt until `parse` accepts the answer.
    fn prompt_valid<T>(
        &mut self,
        label: &str,
        what: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.output, "Invalid {what}. Please try again.")?,
            }
        }
    }

    fn prompt_id(&mut self, label: &str) -> io::Result<Option<u32>> {
        self.prompt_valid(label, "ID", |s| s.parse().ok())
    }

    fn report<T, D: Display>(
        &mut self,
        result: Result<T, crate::storage::StoreError>,
        describe: impl FnOnce(T) -> D,
    ) -> io::Result<()> {
        match result {
            Ok(value) => writeln!(self.output, "{}", describe(value)),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn positive(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
