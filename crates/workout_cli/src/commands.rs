//! Subcommand handlers. Each one calls store operations and renders results.

use crate::cli::Command;
use crate::render::{
    changed_text, created_text, exercise_text, exercises_text, history_text, session_detail_text,
    template_detail_text, templates_text, Changed, Created, Renderer, SessionDetail,
    TemplateDetail,
};
use anyhow::{bail, Result};
use workout_core::{DeleteOutcome, ExerciseDraft, WorkoutStore};

pub fn run(store: &WorkoutStore, command: &Command, out: &Renderer) -> Result<()> {
    match command {
        Command::Exercises { search } => {
            let rows = match search.as_deref() {
                Some(text) => store.search_exercises(text)?,
                None => store.list_exercises()?,
            };
            out.emit(rows.as_slice(), exercises_text)
        }
        Command::ExerciseAdd {
            name,
            muscle_group,
            equipment,
            description,
        } => {
            let draft = ExerciseDraft {
                name: name.clone(),
                muscle_group: muscle_group.clone(),
                equipment: equipment.clone().unwrap_or_default(),
                description: description.clone().unwrap_or_default(),
            };
            let id = store.insert_exercise(&draft.validate()?)?;
            out.emit(&Created { kind: "exercise", id }, created_text)
        }
        Command::ExerciseShow { id } => match store.get_exercise(*id)? {
            Some(exercise) => out.emit(&exercise, exercise_text),
            None => bail!("exercise #{id} not found"),
        },
        Command::ExerciseEdit {
            id,
            name,
            muscle_group,
            equipment,
            description,
        } => {
            let Some(current) = store.get_exercise(*id)? else {
                bail!("exercise #{id} not found");
            };
            let draft = ExerciseDraft {
                name: name.clone().unwrap_or(current.name),
                muscle_group: muscle_group.clone().unwrap_or(current.muscle_group),
                equipment: equipment
                    .clone()
                    .or(current.equipment)
                    .unwrap_or_default(),
                description: description
                    .clone()
                    .or(current.description)
                    .unwrap_or_default(),
            };
            let changed = store.update_exercise(*id, &draft.validate()?)?;
            out.emit(
                &Changed {
                    kind: "exercise",
                    id: *id,
                    changed,
                },
                changed_text,
            )
        }
        Command::ExerciseDelete { id } => {
            let deleted = match store.delete_exercise(*id)? {
                DeleteOutcome::Deleted => true,
                DeleteOutcome::NotFound => false,
                DeleteOutcome::InUse => {
                    bail!("exercise #{id} is used by a template or session log")
                }
            };
            out.emit(
                &Changed {
                    kind: "exercise",
                    id: *id,
                    changed: deleted,
                },
                changed_text,
            )
        }
        Command::Templates => {
            let rows = store.list_workout_templates()?;
            out.emit(rows.as_slice(), templates_text)
        }
        Command::TemplateShow { id } => {
            let Some(template) = store.get_workout_template(*id)? else {
                bail!("workout template #{id} not found");
            };
            let exercises = store.get_workout_exercises(*id)?;
            out.emit(
                &TemplateDetail {
                    template: &template,
                    exercises: &exercises,
                },
                template_detail_text,
            )
        }
        Command::TemplateCreate { name, description } => {
            if name.trim().is_empty() {
                bail!("workout name is required");
            }
            let id = store.create_workout_template(name.trim(), description.as_deref())?;
            out.emit(&Created { kind: "workout template", id }, created_text)
        }
        Command::TemplateAddExercise {
            template_id,
            exercise_id,
            sets,
            reps,
            rest,
        } => {
            let id =
                store.add_exercise_to_template(*template_id, *exercise_id, *sets, reps, *rest)?;
            out.emit(&Created { kind: "template exercise", id }, created_text)
        }
        Command::SessionStart { template_id } => {
            let id = store.start_workout_session(*template_id)?;
            out.emit(&Created { kind: "session", id }, created_text)
        }
        Command::SessionLog {
            session_id,
            exercise_id,
            set_number,
            weight,
            reps,
            skipped,
        } => {
            let id = store.log_exercise_set(
                *session_id,
                *exercise_id,
                *set_number,
                *weight,
                *reps,
                !*skipped,
            )?;
            out.emit(&Created { kind: "set log", id }, created_text)
        }
        Command::SessionComplete { session_id, notes } => {
            let changed = store.complete_workout_session(*session_id, notes.as_deref())?;
            out.emit(
                &Changed {
                    kind: "session",
                    id: *session_id,
                    changed,
                },
                changed_text,
            )
        }
        Command::SessionShow { session_id } => {
            let Some(session) = store.get_workout_session(*session_id)? else {
                bail!("session #{session_id} not found");
            };
            let logs = store.list_session_logs(*session_id)?;
            out.emit(
                &SessionDetail {
                    session: &session,
                    state: session.state(),
                    duration_seconds: session.duration_seconds(),
                    logs: &logs,
                },
                session_detail_text,
            )
        }
        Command::History { limit } => {
            let rows = store.list_recent_sessions(*limit)?;
            out.emit(rows.as_slice(), history_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::cli::Command;
    use crate::render::Renderer;
    use workout_core::{ExerciseValidationError, SessionState, WorkoutStore};

    fn quiet() -> Renderer {
        Renderer::new(true)
    }

    #[test]
    fn exercise_add_rejects_blank_name_before_touching_the_store() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let command = Command::ExerciseAdd {
            name: "  ".to_string(),
            muscle_group: "Legs".to_string(),
            equipment: None,
            description: None,
        };

        let err = run(&store, &command, &quiet()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExerciseValidationError>(),
            Some(&ExerciseValidationError::MissingName)
        );
        assert_eq!(store.list_exercises().unwrap().len(), 6);
    }

    #[test]
    fn exercise_edit_keeps_omitted_fields() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let command = Command::ExerciseEdit {
            id: 1,
            name: Some("Incline Bench Press".to_string()),
            muscle_group: None,
            equipment: None,
            description: None,
        };

        run(&store, &command, &quiet()).unwrap();
        let edited = store.get_exercise(1).unwrap().unwrap();
        assert_eq!(edited.name, "Incline Bench Press");
        assert_eq!(edited.muscle_group, "Chest");
        assert_eq!(edited.equipment.as_deref(), Some("Barbell"));
    }

    #[test]
    fn deleting_exercise_in_use_reports_a_readable_error() {
        let store = WorkoutStore::open_in_memory().unwrap();

        let err = run(&store, &Command::ExerciseDelete { id: 1 }, &quiet()).unwrap_err();
        assert!(err.to_string().contains("used by a template"));
        assert!(store.get_exercise(1).unwrap().is_some());
    }

    #[test]
    fn deleting_unreferenced_exercise_removes_it() {
        let store = WorkoutStore::open_in_memory().unwrap();

        run(&store, &Command::ExerciseDelete { id: 4 }, &quiet()).unwrap();
        assert!(store.get_exercise(4).unwrap().is_none());
        run(&store, &Command::ExerciseDelete { id: 4 }, &quiet()).unwrap();
    }

    #[test]
    fn session_flow_logs_sets_and_completes() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let out = quiet();

        run(&store, &Command::SessionStart { template_id: 1 }, &out).unwrap();
        let session_id = store.list_recent_sessions(1).unwrap()[0].session_id;
        run(
            &store,
            &Command::SessionLog {
                session_id,
                exercise_id: 1,
                set_number: 1,
                weight: Some(80.0),
                reps: Some(10),
                skipped: false,
            },
            &out,
        )
        .unwrap();
        run(
            &store,
            &Command::SessionComplete {
                session_id,
                notes: Some("felt good".to_string()),
            },
            &out,
        )
        .unwrap();
        run(&store, &Command::SessionShow { session_id }, &out).unwrap();

        let session = store.get_workout_session(session_id).unwrap().unwrap();
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.notes.as_deref(), Some("felt good"));
        assert_eq!(store.list_session_logs(session_id).unwrap().len(), 1);
    }

    #[test]
    fn missing_records_are_reported_as_errors_by_show_commands() {
        let store = WorkoutStore::open_in_memory().unwrap();
        let out = quiet();

        assert!(run(&store, &Command::ExerciseShow { id: 99 }, &out).is_err());
        assert!(run(&store, &Command::TemplateShow { id: 99 }, &out).is_err());
        assert!(run(&store, &Command::SessionShow { session_id: 99 }, &out).is_err());
        run(
            &store,
            &Command::SessionComplete {
                session_id: 99,
                notes: None,
            },
            &out,
        )
        .unwrap();
    }
}
