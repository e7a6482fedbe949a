//! Fixed 4-day training split and the fight-week advisory.
//!
//! The split is a constant template keyed by day index; training-day counts
//! in the profile do not change it.

use crate::types::*;
use once_cell::sync::Lazy;

/// Weeks out from an event at or below which the fight-week advisory applies
pub const FIGHT_WEEK_THRESHOLD_WEEKS: u32 = 7;

pub const FIGHT_WEEK_ADVISORY: &str = "Fight-week caution: avoid aggressive dehydration \
     or water cuts, and reduce training volume as the event approaches.";

pub const BJJ_NOTE: &str = "BJJ on Days 1/3/4; load carbs ~90–120 min pre-roll and post-roll.";

/// Cached template, built once on first use
static TRAINING_SPLIT: Lazy<Vec<TrainingDay>> = Lazy::new(build_training_split);

/// The four training days in order
pub fn training_split() -> &'static [TrainingDay] {
    &TRAINING_SPLIT
}

/// Caution text for athletes close to competition, if any applies
pub fn fight_week_advisory(weeks_to_event: Option<u32>) -> Option<&'static str> {
    match weeks_to_event {
        Some(weeks) if weeks <= FIGHT_WEEK_THRESHOLD_WEEKS => Some(FIGHT_WEEK_ADVISORY),
        _ => None,
    }
}

fn day(day: u8, title: &str, exercises: &[(&str, &str)]) -> TrainingDay {
    TrainingDay {
        day,
        title: title.into(),
        exercises: exercises
            .iter()
            .map(|(name, prescription)| Exercise {
                name: (*name).into(),
                prescription: (*prescription).into(),
            })
            .collect(),
    }
}

fn build_training_split() -> Vec<TrainingDay> {
    vec![
        day(
            1,
            "Upper Push",
            &[
                ("Bench/DB Press", "4×6–8"),
                ("OHP", "3×6–8"),
                ("Incline DB", "3×8–10"),
                ("Dips", "3×AMRAP"),
                ("Laterals", "4×12–15"),
                ("Triceps", "3×10–12"),
            ],
        ),
        day(
            2,
            "Lower (hinge+quad)",
            &[
                ("RDL", "4×6–8"),
                ("Back/Hack Squat", "4×6–10"),
                ("Split Squat", "3×8–10"),
                ("Ham Curl", "3×10–12"),
                ("Calves", "4×12–15"),
            ],
        ),
        day(
            3,
            "Upper Pull + Arms",
            &[
                ("Pull-ups", "4×AMRAP"),
                ("Row", "4×6–10"),
                ("Pulldown", "3×10–12"),
                ("Face Pull", "3×15"),
                ("Hammer Curl", "3×10–12"),
                ("Cable Curl", "3×12–15"),
            ],
        ),
        day(
            4,
            "Athletic/Conditioning",
            &[
                ("Trap Bar Jumps", "4×3"),
                ("KB Swings", "4×12"),
                ("Sled Push", "6×30m"),
                ("Core", "10–12 min"),
            ],
        ),
    ]
}

impl TrainingDay {
    /// Single-line rendering, e.g. "Day 1 – Upper Push: Bench/DB Press 4×6–8, ..."
    pub fn summary_line(&self) -> String {
        let exercises = self
            .exercises
            .iter()
            .map(|e| format!("{} {}", e.name, e.prescription))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Day {} – {}: {}", self.day, self.title, exercises)
    }
}
