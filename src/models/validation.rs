use regex::Regex;
use std::sync::OnceLock;

use crate::error::{CoachError, Result};
use crate::models::{Category, User, Workout};

/// Session lengths the product offers; other values are allowed but logged.
pub const STANDARD_SESSION_MINUTES: [u32; 3] = [15, 30, 45];

fn video_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://[A-Za-z0-9.-]+(:\d+)?(/\S*)?$").expect("video url pattern is valid")
    })
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoachError::validation(field, "cannot be empty"));
    }
    Ok(())
}

/// User validation
pub fn validate_user(user: &User) -> Result<()> {
    require_text("id", &user.id)?;
    require_text("skill_focus", &user.skill_focus)?;

    if user.available_time == 0 {
        return Err(CoachError::validation(
            "available_time",
            "must be at least one minute",
        ));
    }

    if !STANDARD_SESSION_MINUTES.contains(&user.available_time) {
        tracing::debug!(
            "User {} has a non-standard session length of {} minutes",
            user.id,
            user.available_time
        );
    }

    Ok(())
}

/// Workout validation
pub fn validate_workout(workout: &Workout) -> Result<()> {
    require_text("id", &workout.id)?;
    require_text("name", &workout.name)?;

    if workout.category.parse::<Category>().is_err() {
        return Err(CoachError::validation(
            "category",
            format!(
                "'{}' must be one of: Warmup, Skill, Strength, Cooldown",
                workout.category
            ),
        ));
    }

    if workout.progression_level < 1 {
        return Err(CoachError::validation(
            "progression_level",
            format!("must be 1 or higher, got {}", workout.progression_level),
        ));
    }

    if let Some(ref groups) = workout.muscle_groups {
        if groups.iter().any(|g| g.trim().is_empty()) {
            return Err(CoachError::validation(
                "muscle_groups",
                "entries cannot be blank",
            ));
        }
    }

    if let Some(ref url) = workout.video_url {
        validate_video_url(url)?;
    }

    Ok(())
}

/// Video links must be absolute http(s) URLs
pub fn validate_video_url(url: &str) -> Result<()> {
    if !video_url_pattern().is_match(url) {
        return Err(CoachError::validation(
            "video_url",
            format!("'{}' is not an http(s) URL", url),
        ));
    }
    Ok(())
}
