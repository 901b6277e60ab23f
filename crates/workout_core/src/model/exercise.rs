//! Exercise library records and the add/edit form check.
//!
//! # Invariants
//! - `name` and `muscle_group` are required by the form check only; the
//!   store accepts whatever it is given.
//! - Muscle groups form an open set; `KNOWN_MUSCLE_GROUPS` are suggestions.

use super::ExerciseId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Muscle groups offered as suggestions by exercise forms.
pub const KNOWN_MUSCLE_GROUPS: &[&str] = &[
    "Chest",
    "Back",
    "Legs",
    "Shoulders",
    "Arms",
    "Core",
    "Full Body",
];

/// Full exercise row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub muscle_group: String,
    pub equipment: Option<String>,
    pub description: Option<String>,
}

/// Exercise library list row (no description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: ExerciseId,
    pub name: String,
    pub muscle_group: String,
    pub equipment: Option<String>,
}

/// Attribute set written by exercise inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: String,
    pub equipment: Option<String>,
    pub description: Option<String>,
}

impl NewExercise {
    pub fn new(
        name: impl Into<String>,
        muscle_group: impl Into<String>,
        equipment: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group: muscle_group.into(),
            equipment,
            description,
        }
    }
}

/// Raw exercise form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
    pub description: String,
}

/// Required-field failures reported by `ExerciseDraft::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    MissingName,
    MissingMuscleGroup,
}

impl Display for ExerciseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "exercise name is required"),
            Self::MissingMuscleGroup => write!(
                f,
                "muscle group is required (for example {})",
                KNOWN_MUSCLE_GROUPS.join(", ")
            ),
        }
    }
}

impl Error for ExerciseValidationError {}

impl ExerciseDraft {
    /// Checks required fields and converts the draft into insertable data.
    ///
    /// Surrounding whitespace is trimmed; blank optional fields become `None`.
    pub fn validate(&self) -> Result<NewExercise, ExerciseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExerciseValidationError::MissingName);
        }
        let muscle_group = self.muscle_group.trim();
        if muscle_group.is_empty() {
            return Err(ExerciseValidationError::MissingMuscleGroup);
        }

        Ok(NewExercise::new(
            name,
            muscle_group,
            non_blank(&self.equipment),
            non_blank(&self.description),
        ))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{ExerciseDraft, ExerciseValidationError, KNOWN_MUSCLE_GROUPS};

    fn draft(name: &str, muscle_group: &str) -> ExerciseDraft {
        ExerciseDraft {
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            ..ExerciseDraft::default()
        }
    }

    #[test]
    fn validate_rejects_blank_name_first() {
        assert_eq!(
            draft("   ", "").validate(),
            Err(ExerciseValidationError::MissingName)
        );
    }

    #[test]
    fn validate_rejects_blank_muscle_group() {
        assert_eq!(
            draft("Lunge", " \t").validate(),
            Err(ExerciseValidationError::MissingMuscleGroup)
        );
    }

    #[test]
    fn missing_muscle_group_message_lists_known_groups() {
        let message = ExerciseValidationError::MissingMuscleGroup.to_string();
        assert!(message.starts_with("muscle group is required"));
        for group in KNOWN_MUSCLE_GROUPS {
            assert!(message.contains(group), "missing {group} in `{message}`");
        }
    }

    #[test]
    fn validate_trims_and_drops_blank_optionals() {
        let mut input = draft("  Lunge ", "Legs");
        input.equipment = "  ".to_string();
        input.description = " step forward ".to_string();

        let exercise = input.validate().unwrap();
        assert_eq!(exercise.name, "Lunge");
        assert_eq!(exercise.muscle_group, "Legs");
        assert_eq!(exercise.equipment, None);
        assert_eq!(exercise.description.as_deref(), Some("step forward"));
    }

    #[test]
    fn validate_accepts_unlisted_muscle_group() {
        let exercise = draft("Wrist Roller", "Forearms").validate().unwrap();
        assert_eq!(exercise.muscle_group, "Forearms");
    }
}
