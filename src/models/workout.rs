use serde::{Deserialize, Serialize};

use crate::error::CoachError;

/// A single catalog entry: one exercise with its difficulty rank.
///
/// Values are stored exactly as supplied; `category` is free text and only
/// interpreted through [`Workout::category_kind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub category: String, // "Warmup", "Skill", "Strength", "Cooldown"
    #[serde(default)]
    pub muscle_groups: Option<Vec<String>>,
    pub progression_level: i32,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Workout {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        muscle_groups: Option<Vec<String>>,
        progression_level: i32,
        video_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            muscle_groups,
            progression_level,
            video_url,
        }
    }

    /// The category as a closed type, when it names one of the four sections.
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// Muscle groups ordered from most to least involved; empty when absent.
    pub fn muscles(&self) -> &[String] {
        self.muscle_groups.as_deref().unwrap_or(&[])
    }

    pub fn primary_muscle(&self) -> Option<&str> {
        self.muscles().first().map(String::as_str)
    }

    pub fn targets(&self, muscle: &str) -> bool {
        self.muscles().iter().any(|m| m.eq_ignore_ascii_case(muscle))
    }

    /// Within two levels either side of `level`.
    pub fn is_suitable_for_level(&self, level: i32) -> bool {
        (self.progression_level - level).abs() <= 2
    }
}

/// Session section a workout belongs to, in the order they are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Warmup,
    Skill,
    Strength,
    Cooldown,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Warmup,
        Category::Skill,
        Category::Strength,
        Category::Cooldown,
    ];

    /// Share of a session's total time spent in this section.
    pub fn time_share(self) -> f64 {
        match self {
            Category::Warmup => 0.15,
            Category::Skill => 0.30,
            Category::Strength => 0.45,
            Category::Cooldown => 0.10,
        }
    }

    /// Metabolic equivalent used for calorie estimates.
    pub fn met(self) -> f64 {
        match self {
            Category::Warmup => 3.5,
            Category::Skill => 4.0,
            Category::Strength => 5.0,
            Category::Cooldown => 2.5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Warmup => write!(f, "Warmup"),
            Category::Skill => write!(f, "Skill"),
            Category::Strength => write!(f, "Strength"),
            Category::Cooldown => write!(f, "Cooldown"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warmup" | "warm-up" | "warm up" => Ok(Category::Warmup),
            "skill" => Ok(Category::Skill),
            "strength" => Ok(Category::Strength),
            "cooldown" | "cool-down" | "cool down" => Ok(Category::Cooldown),
            _ => Err(CoachError::UnknownCategory(s.to_string())),
        }
    }
}
