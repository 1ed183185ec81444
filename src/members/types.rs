//! Member entity with derived BMI.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::storage::codec::Record;

/// Membership status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "Active"),
            MemberStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Active" => Ok(MemberStatus::Active),
            "Inactive" => Ok(MemberStatus::Inactive),
            other => Err(format!("unknown member status: {other}")),
        }
    }
}

/// BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiStatus {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    NormalWeight,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 and above
    Obese,
}

impl BmiStatus {
    /// Classify a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiStatus::Underweight
        } else if bmi < 25.0 {
            BmiStatus::NormalWeight
        } else if bmi < 30.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::NormalWeight => "Normal weight",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute BMI from height in meters and weight in kilograms.
///
/// Returns 0 when either input is not positive.
pub fn calculate_bmi(height_m: f64, weight_kg: f64) -> f64 {
    if height_m > 0.0 && weight_kg > 0.0 {
        weight_kg / (height_m * height_m)
    } else {
        0.0
    }
}

/// A registered gym member.
///
/// Height and weight are private so the derived BMI can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    id: u32,
    /// Display name
    pub name: String,
    /// Age in years (range checks belong to the caller)
    pub age: u32,
    /// Free-text membership label such as "Basic" or "Gold"
    pub membership_type: String,
    join_date: NaiveDate,
    /// Active or inactive
    pub status: MemberStatus,
    height_m: f64,
    weight_kg: f64,
    bmi: f64,
}

impl Member {
    /// Create an active member who joined today, with no measurements.
    pub fn new(id: u32, name: String, age: u32, membership_type: String) -> Self {
        Self::with_join_date(id, name, age, membership_type, Local::now().date_naive())
    }

    /// Create an active member with an explicit join date.
    pub fn with_join_date(
        id: u32,
        name: String,
        age: u32,
        membership_type: String,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            age,
            membership_type,
            join_date,
            status: MemberStatus::Active,
            height_m: 0.0,
            weight_kg: 0.0,
            bmi: 0.0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    /// Height in meters, 0 when unset.
    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Weight in kilograms, 0 when unset.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// BMI for the current height and weight, 0 when either is unset.
    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn bmi_status(&self) -> BmiStatus {
        BmiStatus::from_bmi(self.bmi)
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// Set height and recompute BMI against the stored weight.
    pub fn set_height(&mut self, height_m: f64) {
        self.height_m = height_m;
        self.recalculate_bmi();
    }

    /// Set weight and recompute BMI against the stored height.
    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
        self.recalculate_bmi();
    }

    /// Set both measurements with a single recompute.
    pub fn set_measurements(&mut self, height_m: f64, weight_kg: f64) {
        self.height_m = height_m;
        self.weight_kg = weight_kg;
        self.recalculate_bmi();
    }

    fn recalculate_bmi(&mut self) {
        self.bmi = calculate_bmi(self.height_m, self.weight_kg);
    }
}

impl Record for Member {
    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Member ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Membership Type: {}", self.membership_type)?;
        writeln!(f, "Height: {:.2}m", self.height_m)?;
        writeln!(f, "Weight: {:.2}kg", self.weight_kg)?;
        writeln!(f, "BMI: {:.2} ({})", self.bmi, self.bmi_status())?;
        writeln!(f, "Join Date: {}", self.join_date)?;
        write!(f, "Status: {}", self.status)
    }
}
