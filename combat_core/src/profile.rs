//! Biometric and training-load input.
//!
//! `ProfileInput` is the raw form record, carrying the form defaults. It only
//! becomes an `InputProfile` after every field has been range-checked, so the
//! calculation stages never re-validate.

use crate::{Error, Goal, Result, Sex};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 16..=65;
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 140.0..=220.0;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 45.0..=160.0;
pub const BODYFAT_PCT_RANGE: RangeInclusive<u32> = 5..=40;
pub const TRAINING_DAYS_RANGE: RangeInclusive<u32> = 0..=7;
pub const WEEKS_TO_EVENT_RANGE: RangeInclusive<u32> = 0..=24;

/// Unvalidated profile as collected from the user or the config file
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileInput {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bodyfat_pct: Option<u32>,
    pub goal: Goal,
    pub bjj_days: u32,
    pub strength_days: u32,
    pub cardio_days: u32,
    pub weeks_to_event: Option<u32>,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age: 19,
            height_cm: 178.0,
            weight_kg: 84.5,
            bodyfat_pct: Some(22),
            goal: Goal::Cut,
            bjj_days: 4,
            strength_days: 4,
            cardio_days: 1,
            weeks_to_event: Some(8),
        }
    }
}

impl ProfileInput {
    /// Range-check every field and produce a validated profile
    pub fn validate(&self) -> Result<InputProfile> {
        check_int("age", self.age, &AGE_RANGE)?;
        check_real("height_cm", self.height_cm, &HEIGHT_CM_RANGE)?;
        check_real("weight_kg", self.weight_kg, &WEIGHT_KG_RANGE)?;
        if let Some(bf) = self.bodyfat_pct {
            check_int("bodyfat_pct", bf, &BODYFAT_PCT_RANGE)?;
        }
        check_int("bjj_days", self.bjj_days, &TRAINING_DAYS_RANGE)?;
        check_int("strength_days", self.strength_days, &TRAINING_DAYS_RANGE)?;
        check_int("cardio_days", self.cardio_days, &TRAINING_DAYS_RANGE)?;
        if let Some(weeks) = self.weeks_to_event {
            check_int("weeks_to_event", weeks, &WEEKS_TO_EVENT_RANGE)?;
        }

        Ok(InputProfile {
            sex: self.sex,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            bodyfat_pct: self.bodyfat_pct,
            goal: self.goal,
            bjj_days: self.bjj_days,
            strength_days: self.strength_days,
            cardio_days: self.cardio_days,
            weeks_to_event: self.weeks_to_event,
        })
    }
}

impl TryFrom<ProfileInput> for InputProfile {
    type Error = Error;

    fn try_from(input: ProfileInput) -> Result<Self> {
        input.validate()
    }
}

fn check_int(field: &str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidProfile(format!(
            "{} = {} is outside {}..={}",
            field,
            value,
            range.start(),
            range.end()
        )))
    }
}

// NaN fails `contains`, so non-finite input is rejected here too.
fn check_real(field: &str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidProfile(format!(
            "{} = {} is outside {:.1}..={:.1}",
            field,
            value,
            range.start(),
            range.end()
        )))
    }
}

/// A profile whose fields are known to be inside their accepted ranges
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InputProfile {
    sex: Sex,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    bodyfat_pct: Option<u32>,
    goal: Goal,
    bjj_days: u32,
    strength_days: u32,
    cardio_days: u32,
    weeks_to_event: Option<u32>,
}

impl InputProfile {
    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Collected for display only
    pub fn bodyfat_pct(&self) -> Option<u32> {
        self.bodyfat_pct
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn bjj_days(&self) -> u32 {
        self.bjj_days
    }

    pub fn strength_days(&self) -> u32 {
        self.strength_days
    }

    pub fn cardio_days(&self) -> u32 {
        self.cardio_days
    }

    pub fn weeks_to_event(&self) -> Option<u32> {
        self.weeks_to_event
    }
}
