//! Text and JSON rendering of store records.

use anyhow::Result;
use serde::Serialize;
use workout_core::{
    clock, Exercise, ExerciseLog, ExerciseSummary, SessionState, SessionSummary,
    TemplateExercise, WorkoutSession, WorkoutTemplate,
};

/// Writes each result either as pretty JSON or as a text block.
pub struct Renderer {
    json: bool,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn emit<T: Serialize + ?Sized>(
        &self,
        value: &T,
        text: impl FnOnce(&T) -> String,
    ) -> Result<()> {
        let rendered = if self.json {
            serde_json::to_string_pretty(value)?
        } else {
            text(value)
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Outcome of an insert.
#[derive(Debug, Serialize)]
pub struct Created {
    pub kind: &'static str,
    pub id: i64,
}

/// Outcome of an update or delete that may have matched nothing.
#[derive(Debug, Serialize)]
pub struct Changed {
    pub kind: &'static str,
    pub id: i64,
    pub changed: bool,
}

#[derive(Debug, Serialize)]
pub struct TemplateDetail<'a> {
    pub template: &'a WorkoutTemplate,
    pub exercises: &'a [TemplateExercise],
}

#[derive(Debug, Serialize)]
pub struct SessionDetail<'a> {
    pub session: &'a WorkoutSession,
    pub state: SessionState,
    pub duration_seconds: Option<i64>,
    pub logs: &'a [ExerciseLog],
}

pub fn created_text(created: &Created) -> String {
    format!("created {} #{}", created.kind, created.id)
}

pub fn changed_text(changed: &Changed) -> String {
    if changed.changed {
        format!("updated {} #{}", changed.kind, changed.id)
    } else {
        format!("no {} #{} to update", changed.kind, changed.id)
    }
}

pub fn exercises_text(rows: &[ExerciseSummary]) -> String {
    if rows.is_empty() {
        return "no exercises".to_string();
    }
    let mut out = format!("{:>4}  {:<24} {:<12} {}", "ID", "NAME", "MUSCLE", "EQUIPMENT");
    for row in rows {
        out.push_str(&format!(
            "\n{:>4}  {:<24} {:<12} {}",
            row.id,
            row.name,
            row.muscle_group,
            row.equipment.as_deref().unwrap_or("-")
        ));
    }
    out
}

pub fn exercise_text(exercise: &Exercise) -> String {
    format!(
        "#{} {}\n  muscle group: {}\n  equipment:    {}\n  description:  {}",
        exercise.id,
        exercise.name,
        exercise.muscle_group,
        exercise.equipment.as_deref().unwrap_or("-"),
        exercise.description.as_deref().unwrap_or("-")
    )
}

pub fn templates_text(rows: &[WorkoutTemplate]) -> String {
    if rows.is_empty() {
        return "no workout templates".to_string();
    }
    let mut out = format!("{:>4}  {:<24} {:<10} {}", "ID", "NAME", "CREATED", "DESCRIPTION");
    for row in rows {
        out.push_str(&format!(
            "\n{:>4}  {:<24} {:<10} {}",
            row.id,
            row.name,
            clock::format_date(row.created_date),
            row.description.as_deref().unwrap_or("")
        ));
    }
    out
}

pub fn template_detail_text(detail: &TemplateDetail<'_>) -> String {
    let mut out = format!(
        "#{} {} (created {})",
        detail.template.id,
        detail.template.name,
        clock::format_date(detail.template.created_date)
    );
    if let Some(description) = detail.template.description.as_deref() {
        out.push_str(&format!("\n  {description}"));
    }
    if detail.exercises.is_empty() {
        out.push_str("\n  no exercises yet");
    }
    for exercise in detail.exercises {
        out.push_str(&format!(
            "\n  - {} [{}] {} x {}{}",
            exercise.exercise_name,
            exercise.muscle_group,
            exercise.sets,
            exercise.reps,
            exercise
                .rest_time
                .map(|seconds| format!(", rest {seconds}s"))
                .unwrap_or_default()
        ));
    }
    out
}

pub fn session_detail_text(detail: &SessionDetail<'_>) -> String {
    let session = detail.session;
    let mut out = format!(
        "session #{} (template #{}) started {}",
        session.id,
        session.workout_id,
        clock::format_timestamp(session.start_time)
    );
    match (session.end_time, detail.duration_seconds) {
        (Some(end), Some(seconds)) => out.push_str(&format!(
            "\n  completed {} after {}",
            clock::format_timestamp(end),
            format_duration(seconds)
        )),
        _ => out.push_str("\n  in progress"),
    }
    if let Some(notes) = session.notes.as_deref() {
        out.push_str(&format!("\n  notes: {notes}"));
    }
    for log in detail.logs {
        out.push_str(&format!(
            "\n  exercise #{} set {}: {} x {}{}",
            log.exercise_id,
            log.set_number,
            log.weight
                .map(|weight| format!("{weight:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            log.reps
                .map(|reps| reps.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if log.completed { "" } else { " (not completed)" }
        ));
    }
    out
}

pub fn history_text(rows: &[SessionSummary]) -> String {
    if rows.is_empty() {
        return "no sessions yet".to_string();
    }
    let mut out = format!("{:>4}  {:<19}  {:<24} {}", "ID", "DATE", "WORKOUT", "DURATION");
    for row in rows {
        out.push_str(&format!(
            "\n{:>4}  {:<19}  {:<24} {}",
            row.session_id,
            clock::format_timestamp(row.start_time),
            row.workout_name.as_deref().unwrap_or("-"),
            row.duration_seconds
                .map(format_duration)
                .unwrap_or_else(|| "in progress".to_string())
        ));
    }
    out
}

fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let (hours, minutes, secs) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else {
        format!("{minutes}m {secs:02}s")
    }
}

#[cfg(test)]
mod tests {
    use super::{changed_text, exercises_text, format_duration, history_text, Changed};
    use workout_core::{clock, ExerciseSummary, SessionSummary};

    #[test]
    fn durations_switch_to_hours_past_sixty_minutes() {
        assert_eq!(format_duration(95), "1m 35s");
        assert_eq!(format_duration(3 * 3600 + 5 * 60), "3h 05m");
        assert_eq!(format_duration(-4), "0m 00s");
    }

    #[test]
    fn exercise_table_marks_missing_equipment() {
        let text = exercises_text(&[ExerciseSummary {
            id: 7,
            name: "Plank".to_string(),
            muscle_group: "Core".to_string(),
            equipment: None,
        }]);
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("Plank"));
        assert!(row.trim_end().ends_with('-'));
    }

    #[test]
    fn history_shows_open_sessions_as_in_progress() {
        let start = clock::parse_timestamp("2024-02-01 06:30:00").unwrap();
        let text = history_text(&[SessionSummary {
            session_id: 3,
            workout_id: 1,
            workout_name: Some("Full Body Workout".to_string()),
            start_time: start,
            end_time: None,
            duration_seconds: None,
        }]);
        assert!(text.contains("2024-02-01 06:30:00"));
        assert!(text.ends_with("in progress"));
    }

    #[test]
    fn history_marks_sessions_without_a_template() {
        let text = history_text(&[SessionSummary {
            session_id: 4,
            workout_id: 77,
            workout_name: None,
            start_time: clock::parse_timestamp("2024-03-01 07:00:00").unwrap(),
            end_time: None,
            duration_seconds: None,
        }]);
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("2024-03-01 07:00:00  -"));
        assert!(row.ends_with("in progress"));
    }

    #[test]
    fn noop_updates_are_reported() {
        let text = changed_text(&Changed {
            kind: "session",
            id: 12,
            changed: false,
        });
        assert_eq!(text, "no session #12 to update");
    }
}
