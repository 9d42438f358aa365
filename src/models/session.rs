use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{CoachError, Result};
use crate::models::{Category, Skill, UserProfile, Workout};

/// A training session assembled from catalog workouts, grouped into the
/// four sections in the order they are performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub focus_skill: Option<Skill>,
    pub duration_minutes: u32,
    pub difficulty: u32,
    pub sections: BTreeMap<Category, Vec<Workout>>,
}

impl Session {
    pub fn new(focus_skill: Option<Skill>, duration_minutes: u32, difficulty: u32) -> Self {
        Self {
            id: format!("session-{}", Uuid::new_v4()),
            focus_skill,
            duration_minutes,
            difficulty,
            sections: Category::ALL
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect(),
        }
    }

    pub fn add_workout(&mut self, category: Category, workout: Workout) {
        self.sections.entry(category).or_default().push(workout);
    }

    /// Add a workout to the section named by its own category.
    pub fn place(&mut self, workout: Workout) -> Result<()> {
        let category = workout
            .category_kind()
            .ok_or_else(|| CoachError::UnknownCategory(workout.category.clone()))?;
        self.add_workout(category, workout);
        Ok(())
    }

    /// Swap every occurrence of `old_id` for `replacement`. Returns whether
    /// anything was replaced.
    pub fn replace_workout(&mut self, old_id: &str, replacement: &Workout) -> bool {
        let mut replaced = false;
        for workouts in self.sections.values_mut() {
            for workout in workouts.iter_mut().filter(|w| w.id == old_id) {
                *workout = replacement.clone();
                replaced = true;
            }
        }
        replaced
    }

    pub fn section(&self, category: Category) -> &[Workout] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All workouts, section by section.
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.sections.values().flatten()
    }

    pub fn workout_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Minutes allotted to a section, rounded.
    pub fn section_duration(&self, category: Category) -> u32 {
        (self.duration_minutes as f64 * category.time_share()).round() as u32
    }

    pub fn section_durations(&self) -> BTreeMap<Category, u32> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.section_duration(*category)))
            .collect()
    }

    /// Rounded mean progression level; 1 for an empty session.
    pub fn average_level(&self) -> i32 {
        let count = self.workout_count();
        if count == 0 {
            return 1;
        }
        let total: i64 = self.workouts().map(|w| w.progression_level as i64).sum();
        (total as f64 / count as f64).round() as i32
    }

    /// Within two levels of the user's focus-skill level, or of their mean
    /// level when the session has no focus or the skill has no recorded
    /// level. Empty sessions never fit.
    pub fn is_appropriate_for(&self, profile: &UserProfile) -> bool {
        let count = self.workout_count();
        if count == 0 {
            return false;
        }

        let total: i64 = self.workouts().map(|w| w.progression_level as i64).sum();
        let average = total as f64 / count as f64;

        let user_level = self
            .focus_skill
            .and_then(|skill| profile.skill_levels.get(&skill))
            .map(|level| *level as f64)
            .unwrap_or_else(|| profile.mean_skill_level());

        (average - user_level).abs() <= 2.0
    }

    /// Copy of the session with a new duration. Shortening drops workouts
    /// from the end of each section in proportion, but never empties a
    /// section; lengthening keeps the workouts as they are.
    pub fn with_duration(&self, minutes: u32) -> Session {
        let mut adjusted = self.clone();
        adjusted.duration_minutes = minutes;

        if minutes < self.duration_minutes && self.duration_minutes > 0 {
            let removal = 1.0 - minutes as f64 / self.duration_minutes as f64;
            for workouts in adjusted.sections.values_mut() {
                let remove = (workouts.len() as f64 * removal).floor() as usize;
                if remove > 0 && workouts.len() > remove {
                    workouts.truncate(workouts.len() - remove);
                }
            }
        }

        adjusted
    }

    /// Calories from each section's MET value, body weight and time share.
    pub fn estimate_calories(&self, weight_kg: f64) -> u32 {
        let total: f64 = Category::ALL
            .iter()
            .map(|category| {
                let hours = self.section_duration(*category) as f64 / 60.0;
                category.met() * weight_kg * hours
            })
            .sum();
        total.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(id: &str, category: &str, level: i32) -> Workout {
        Workout::new(id, id, category, None, level, None)
    }

    fn sample() -> Session {
        let mut session = Session::new(Some(Skill::Handstand), 30, 2);
        session.place(workout("wu-plank", "Warmup", 1)).unwrap();
        session.place(workout("hs-wall-walk", "Skill", 2)).unwrap();
        session.place(workout("hs-pike-pushup", "Skill", 2)).unwrap();
        session.place(workout("st-pushup", "Strength", 2)).unwrap();
        session.place(workout("st-dips", "Strength", 4)).unwrap();
        session
    }

    #[test]
    fn test_new_session_has_every_section() {
        let session = Session::new(None, 30, 1);
        assert!(session.id.starts_with("session-"));
        assert_eq!(session.sections.len(), 4);
        assert_eq!(session.workout_count(), 0);
        assert_eq!(session.average_level(), 1);
    }

    #[test]
    fn test_place_uses_record_category() {
        let mut session = sample();
        assert_eq!(session.section(Category::Skill).len(), 2);
        assert!(matches!(
            session.place(workout("x", "Cardio", 1)),
            Err(CoachError::UnknownCategory(_))
        ));

        let order: Vec<&str> = session.workouts().map(|w| w.id.as_str()).collect();
        assert_eq!(
            order,
            vec!["wu-plank", "hs-wall-walk", "hs-pike-pushup", "st-pushup", "st-dips"]
        );
    }

    #[test]
    fn test_section_durations() {
        let session = sample();
        let durations = session.section_durations();
        assert_eq!(durations[&Category::Warmup], 5); // 4.5 rounds up
        assert_eq!(durations[&Category::Skill], 9);
        assert_eq!(durations[&Category::Strength], 14); // 13.5
        assert_eq!(durations[&Category::Cooldown], 3);
    }

    #[test]
    fn test_average_level() {
        assert_eq!(sample().average_level(), 2); // 11 / 5
    }

    #[test]
    fn test_replace_workout() {
        let mut session = sample();
        let harder = workout("hs-wall-handstand", "Skill", 3);
        assert!(session.replace_workout("hs-wall-walk", &harder));
        assert!(!session.replace_workout("missing", &harder));
        assert_eq!(session.section(Category::Skill)[0].id, "hs-wall-handstand");
        assert_eq!(session.workout_count(), 5);
    }

    #[test]
    fn test_appropriateness() {
        let session = sample();
        let mut profile = UserProfile::new("user-1");
        assert!(session.is_appropriate_for(&profile));

        profile.update_skill_level(Skill::Handstand, 6);
        assert!(!session.is_appropriate_for(&profile));

        let mut unfocused = session.clone();
        unfocused.focus_skill = None;
        assert!(unfocused.is_appropriate_for(&profile)); // mean level 2

        assert!(!Session::new(None, 30, 1).is_appropriate_for(&profile));
    }

    #[test]
    fn test_appropriateness_falls_back_to_mean_level() {
        let json = r#"{
            "id": "user-4",
            "created_at": "2024-01-01T00:00:00Z",
            "last_active": "2024-01-02T00:00:00Z",
            "skill_levels": {"handstand": 5}
        }"#;
        let mut profile: UserProfile = serde_json::from_str(json).unwrap();

        let mut easy = Session::new(None, 30, 1);
        easy.place(workout("wu-plank", "Warmup", 1)).unwrap();
        assert!(easy.is_appropriate_for(&profile)); // mean 1.8

        // A focus skill with no recorded level is judged against the mean.
        profile.skill_levels.remove(&Skill::Planche);
        easy.focus_skill = Some(Skill::Planche);
        assert!(easy.is_appropriate_for(&profile)); // mean 2.0
    }

    #[test]
    fn test_shortening_trims_sections() {
        let session = sample();
        let short = session.with_duration(15);
        assert_eq!(short.duration_minutes, 15);
        assert_eq!(short.section(Category::Warmup).len(), 1);
        assert_eq!(short.section(Category::Skill).len(), 1);
        assert_eq!(short.section(Category::Skill)[0].id, "hs-wall-walk");
        assert_eq!(short.section(Category::Strength).len(), 1);

        let long = session.with_duration(60);
        assert_eq!(long.workout_count(), session.workout_count());
        assert_eq!(long.duration_minutes, 60);
    }

    #[test]
    fn test_calorie_estimate() {
        // 70kg over 60 minutes: 9*3.5 + 18*4 + 27*5 + 6*2.5 = 253.5 MET-minutes
        let session = Session::new(None, 60, 1);
        assert_eq!(session.estimate_calories(70.0), 296);
    }
}
