//! Demonstration rows inserted when a database is created.

use crate::clock;
use rusqlite::{params, Connection};

struct SeedExercise {
    name: &'static str,
    muscle_group: &'static str,
    equipment: &'static str,
    description: &'static str,
}

const SEED_EXERCISES: &[SeedExercise] = &[
    SeedExercise {
        name: "Bench Press",
        muscle_group: "Chest",
        equipment: "Barbell",
        description: "Lie on a bench and press the weight up",
    },
    SeedExercise {
        name: "Squat",
        muscle_group: "Legs",
        equipment: "Barbell",
        description: "Lower your body by bending your knees",
    },
    SeedExercise {
        name: "Pull-up",
        muscle_group: "Back",
        equipment: "Body weight",
        description: "Pull your body up to a bar",
    },
    SeedExercise {
        name: "Shoulder Press",
        muscle_group: "Shoulders",
        equipment: "Dumbbells",
        description: "Press the weights overhead",
    },
    SeedExercise {
        name: "Deadlift",
        muscle_group: "Back",
        equipment: "Barbell",
        description: "Lift the weight from the ground",
    },
    SeedExercise {
        name: "Bicep Curl",
        muscle_group: "Arms",
        equipment: "Dumbbells",
        description: "Curl the weight towards your shoulder",
    },
];

const SEED_TEMPLATE_NAME: &str = "Full Body Workout";
const SEED_TEMPLATE_DESCRIPTION: &str = "A complete full body workout";
const SEED_SETS: i64 = 3;
const SEED_REPS: &str = "8-10";

/// Template links as (index into `SEED_EXERCISES`, rest seconds).
const SEED_TEMPLATE_LINKS: &[(usize, i64)] = &[(0, 60), (1, 90), (2, 60), (4, 90)];

pub(super) fn insert_sample_data(conn: &Connection) -> rusqlite::Result<()> {
    let mut exercise_ids = Vec::with_capacity(SEED_EXERCISES.len());
    {
        let mut stmt = conn.prepare(
            "INSERT INTO exercises (name, muscle_group, equipment, description)
             VALUES (?1, ?2, ?3, ?4);",
        )?;
        for exercise in SEED_EXERCISES {
            exercise_ids.push(stmt.insert(params![
                exercise.name,
                exercise.muscle_group,
                exercise.equipment,
                exercise.description,
            ])?);
        }
    }

    conn.execute(
        "INSERT INTO workout_templates (name, description, created_date)
         VALUES (?1, ?2, ?3);",
        params![
            SEED_TEMPLATE_NAME,
            SEED_TEMPLATE_DESCRIPTION,
            clock::format_date(clock::today()),
        ],
    )?;
    let workout_id = conn.last_insert_rowid();

    let mut stmt = conn.prepare(
        "INSERT INTO workout_exercises (workout_id, exercise_id, sets, reps, rest_time)
         VALUES (?1, ?2, ?3, ?4, ?5);",
    )?;
    for (index, rest_time) in SEED_TEMPLATE_LINKS {
        stmt.execute(params![
            workout_id,
            exercise_ids[*index],
            SEED_SETS,
            SEED_REPS,
            rest_time,
        ])?;
    }

    Ok(())
}
