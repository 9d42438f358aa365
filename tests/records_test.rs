use proptest::prelude::*;
use skill_coach::{User, Workout};

fn optional_muscles() -> impl Strategy<Value = Option<Vec<String>>> {
    proptest::option::of(proptest::collection::vec("[a-z-]{1,12}", 0..5))
}

fn optional_url() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("https://[a-z]{3,10}\\.com/[a-z0-9]{0,8}")
}

proptest! {
    #[test]
    fn user_fields_read_back_unchanged(
        id in ".*",
        skill_focus in ".*",
        available_time in any::<u32>(),
    ) {
        let user = User::new(id.clone(), skill_focus.clone(), available_time);
        prop_assert_eq!(&user.id, &id);
        prop_assert_eq!(&user.skill_focus, &skill_focus);
        prop_assert_eq!(user.available_time, available_time);
    }

    #[test]
    fn workout_fields_read_back_unchanged(
        id in ".*",
        name in ".*",
        category in ".*",
        muscle_groups in optional_muscles(),
        progression_level in any::<i32>(),
        video_url in optional_url(),
    ) {
        let workout = Workout::new(
            id.clone(),
            name.clone(),
            category.clone(),
            muscle_groups.clone(),
            progression_level,
            video_url.clone(),
        );
        prop_assert_eq!(&workout.id, &id);
        prop_assert_eq!(&workout.name, &name);
        prop_assert_eq!(&workout.category, &category);
        prop_assert_eq!(&workout.muscle_groups, &muscle_groups);
        prop_assert_eq!(workout.progression_level, progression_level);
        prop_assert_eq!(&workout.video_url, &video_url);
    }

    #[test]
    fn workouts_with_one_differing_level_are_unequal(level in -1000i32..1000, delta in 1i32..50) {
        let a = Workout::new("w1", "Tuck Hold", "Skill", None, level, None);
        let b = Workout::new("w1", "Tuck Hold", "Skill", None, level + delta, None);
        prop_assert_eq!(a.clone(), a.clone());
        prop_assert_ne!(a, b);
    }
}

#[test]
fn test_tuck_hold_example() {
    let workout = Workout::new(
        "w1",
        "Tuck Hold",
        "Skill",
        Some(vec!["core".to_string(), "shoulders".to_string()]),
        2,
        None,
    );

    assert_eq!(workout.id, "w1");
    assert_eq!(workout.name, "Tuck Hold");
    assert_eq!(workout.category, "Skill");
    assert_eq!(
        workout.muscle_groups.as_deref(),
        Some(&["core".to_string(), "shoulders".to_string()][..])
    );
    assert_eq!(workout.progression_level, 2);
    assert_eq!(workout.video_url, None);
}

#[test]
fn test_optional_fields_are_independent() {
    let neither = Workout::new("w1", "Tuck Hold", "Skill", None, 2, None);
    let only_video = Workout::new(
        "w1",
        "Tuck Hold",
        "Skill",
        None,
        2,
        Some("https://example.com/tuck".to_string()),
    );
    let only_muscles = Workout::new(
        "w1",
        "Tuck Hold",
        "Skill",
        Some(vec!["core".to_string()]),
        2,
        None,
    );

    assert!(neither.muscle_groups.is_none() && neither.video_url.is_none());
    assert!(only_video.muscle_groups.is_none() && only_video.video_url.is_some());
    assert!(only_muscles.muscle_groups.is_some() && only_muscles.video_url.is_none());
}

#[test]
fn test_every_workout_field_participates_in_equality() {
    let base = Workout::new(
        "w1",
        "Tuck Hold",
        "Skill",
        Some(vec!["core".to_string()]),
        2,
        None,
    );
    assert_eq!(base, base.clone());

    let variants = [
        Workout { id: "w2".to_string(), ..base.clone() },
        Workout { name: "Tuck Planche".to_string(), ..base.clone() },
        Workout { category: "Strength".to_string(), ..base.clone() },
        Workout { muscle_groups: None, ..base.clone() },
        Workout { progression_level: 3, ..base.clone() },
        Workout { video_url: Some("https://example.com".to_string()), ..base.clone() },
    ];
    for variant in variants {
        assert_ne!(variant, base);
    }
}

#[test]
fn test_every_user_field_participates_in_equality() {
    let base = User::new("u1", "Handstand", 30);
    assert_eq!(base, User::new("u1", "Handstand", 30));
    assert_ne!(base, User { id: "u2".to_string(), ..base.clone() });
    assert_ne!(base, User { skill_focus: "Planche".to_string(), ..base.clone() });
    assert_ne!(base, User { available_time: 45, ..base.clone() });
}

#[test]
fn test_records_serialize_with_explicit_absence() {
    let workout = Workout::new("w1", "Tuck Hold", "Skill", None, 2, None);
    let value = serde_json::to_value(&workout).unwrap();
    assert!(value["muscle_groups"].is_null());
    assert!(value["video_url"].is_null());

    let user: User =
        serde_json::from_str(r#"{"id":"u1","skill_focus":"Handstand","available_time":15}"#)
            .unwrap();
    assert_eq!(user, User::new("u1", "Handstand", 15));
}
