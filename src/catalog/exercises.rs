use crate::models::Workout;

fn muscles(groups: &[&str]) -> Option<Vec<String>> {
    Some(groups.iter().map(|g| g.to_string()).collect())
}

pub(super) fn builtin_workouts() -> Vec<Workout> {
    vec![
        Workout::new(
            "wu-plank",
            "Plank Warmup",
            "Warmup",
            muscles(&["core", "shoulders"]),
            1,
            None,
        ),
        Workout::new(
            "st-pushup",
            "Standard Pushup",
            "Strength",
            muscles(&["chest", "triceps", "core"]),
            2,
            None,
        ),
        Workout::new(
            "hs-wall-plank",
            "Wall Plank",
            "Skill",
            muscles(&["shoulders", "core"]),
            1,
            None,
        ),
        Workout::new(
            "hs-pike-pushup",
            "Pike Pushup",
            "Skill",
            muscles(&["shoulders", "triceps"]),
            2,
            None,
        ),
        Workout::new(
            "hs-wall-walk",
            "Wall Walk",
            "Skill",
            muscles(&["shoulders", "core"]),
            2,
            None,
        ),
        Workout::new(
            "hs-wall-handstand",
            "Wall Handstand",
            "Skill",
            muscles(&["shoulders", "core"]),
            3,
            None,
        ),
    ]
}
