use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ProgressionNode, ProgressionTree, Session, Skill, User};

/// Consecutive successes that count as mastery when a node has no criteria.
pub const MASTERY_STREAK: u32 = 3;

/// Training preferences a user sets for themselves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_workout_duration")]
    pub workout_duration: u32, // minutes

    #[serde(default = "default_workout_frequency")]
    pub workout_frequency: u32, // sessions per week

    #[serde(default)]
    pub focus_areas: Vec<String>, // muscle groups

    #[serde(default)]
    pub excluded_workouts: Vec<String>,

    #[serde(default)]
    pub skill_priorities: BTreeMap<Skill, u32>,

    #[serde(default)]
    pub equipment: Vec<String>,
}

fn default_workout_duration() -> u32 {
    30
}

fn default_workout_frequency() -> u32 {
    3
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            workout_duration: default_workout_duration(),
            workout_frequency: default_workout_frequency(),
            focus_areas: Vec::new(),
            excluded_workouts: Vec::new(),
            skill_priorities: BTreeMap::new(),
            equipment: Vec::new(),
        }
    }
}

/// Accumulated results for one progression node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePerformance {
    pub attempts: u32,
    pub successful_attempts: u32,
    pub max_time: u32, // seconds
    pub max_reps: u32,
    pub consecutive_successes: u32,
    pub last_attempt: Option<DateTime<Utc>>,
}

/// One attempt at a progression node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub success: bool,
    #[serde(default)]
    pub time_seconds: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
}

impl Attempt {
    pub fn success() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failure() -> Self {
        Self::default()
    }

    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    pub fn with_time(mut self, seconds: u32) -> Self {
        self.time_seconds = Some(seconds);
        self
    }
}

/// One logged set of a workout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLog {
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub time_seconds: Option<u32>,
}

/// The user's notes and sets for one workout of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLog {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub sets: Vec<SetLog>,
}

/// How a session went, as reported by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionPerformance {
    pub duration_minutes: Option<u32>,
    pub rating: Option<u8>, // 1-5
    #[serde(default)]
    pub notes: String,
    pub calories_burned: Option<u32>,
    /// Workout ids that were not completed.
    #[serde(default)]
    pub skipped: Vec<String>,
    #[serde(default)]
    pub node_attempts: BTreeMap<String, Attempt>,
    /// Per-workout notes and sets, keyed by workout id.
    #[serde(default)]
    pub workouts: BTreeMap<String, WorkoutLog>,
    /// Free-form answers such as "difficulty" or "enjoyment".
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub id: String,
    pub name: String,
    pub category: String,
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub sets: Vec<SetLog>,
}

/// History entry written when a session is finished
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub session_id: String,
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub focus_skill: Option<Skill>,
    pub workouts: Vec<CompletedWorkout>,
    pub rating: Option<u8>,
    pub notes: String,
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
    pub calories_burned: Option<u32>,
}

/// A user's progress through the skill trees, plus the preferences and
/// body measurements the data model needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,

    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub preferences: Preferences,
    #[serde(
        default = "default_skill_levels",
        deserialize_with = "deserialize_skill_levels"
    )]
    pub skill_levels: BTreeMap<Skill, u32>,
    #[serde(default)]
    pub completed_nodes: BTreeMap<Skill, Vec<String>>,
    #[serde(default)]
    pub performance: BTreeMap<String, NodePerformance>,
    #[serde(default)]
    pub history: Vec<CompletionRecord>,
}

fn default_skill_levels() -> BTreeMap<Skill, u32> {
    Skill::ALL.iter().map(|skill| (*skill, 1)).collect()
}

/// Stored levels layered over the defaults, so skills missing from an
/// export still start at level 1.
fn deserialize_skill_levels<'de, D>(deserializer: D) -> Result<BTreeMap<Skill, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = BTreeMap::<Skill, u32>::deserialize(deserializer)?;
    let mut levels = default_skill_levels();
    levels.extend(stored);
    Ok(levels)
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            created_at: now,
            last_active: now,
            age: None,
            height_cm: None,
            weight_kg: None,
            preferences: Preferences::default(),
            skill_levels: default_skill_levels(),
            completed_nodes: BTreeMap::new(),
            performance: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn skill_level(&self, skill: Skill) -> u32 {
        self.skill_levels.get(&skill).copied().unwrap_or(1)
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
        self.touch();
    }

    pub fn update_skill_level(&mut self, skill: Skill, level: u32) {
        self.skill_levels.insert(skill, level);
        self.touch();
    }

    pub fn completed(&self, skill: Skill) -> &[String] {
        self.completed_nodes
            .get(&skill)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mark a node completed. Completing it again changes nothing.
    pub fn complete_progression_node(&mut self, skill: Skill, node_id: &str) {
        let completed = self.completed_nodes.entry(skill).or_default();
        if !completed.iter().any(|id| id == node_id) {
            completed.push(node_id.to_string());
        }
        self.touch();
    }

    pub fn update_node_performance(&mut self, node_id: &str, attempt: &Attempt) {
        let now = Utc::now();
        let perf = self.performance.entry(node_id.to_string()).or_default();

        perf.attempts += 1;
        perf.last_attempt = Some(now);

        if attempt.success {
            perf.successful_attempts += 1;
            perf.consecutive_successes += 1;
        } else {
            perf.consecutive_successes = 0;
        }

        if let Some(time) = attempt.time_seconds {
            perf.max_time = perf.max_time.max(time);
        }
        if let Some(reps) = attempt.reps {
            perf.max_reps = perf.max_reps.max(reps);
        }

        self.last_active = now;
    }

    /// Mastery by streak alone, without a node's criteria.
    pub fn has_node_mastered(&self, node_id: &str) -> bool {
        self.performance
            .get(node_id)
            .map(|perf| perf.consecutive_successes >= MASTERY_STREAK)
            .unwrap_or(false)
    }

    fn has_mastered_node(&self, node: &ProgressionNode) -> bool {
        if node.criteria.is_empty() {
            self.has_node_mastered(&node.id)
        } else {
            node.has_mastered(self.performance.get(&node.id))
        }
    }

    pub fn accessible_nodes<'a>(&self, tree: &'a ProgressionTree) -> Vec<&'a ProgressionNode> {
        tree.accessible_nodes(self.completed(tree.skill))
    }

    /// The node to train next in `tree`, if any is within reach.
    pub fn next_node<'a>(&self, tree: &'a ProgressionTree) -> Option<&'a ProgressionNode> {
        tree.next_node(self.completed(tree.skill), self.skill_level(tree.skill))
    }

    pub fn progression_path<'a>(&self, tree: &'a ProgressionTree) -> Vec<&'a ProgressionNode> {
        tree.progression_path(self.completed(tree.skill), self.skill_level(tree.skill))
    }

    /// Record attempts at nodes of `tree` and complete every node that is now
    /// mastered. Attempts for ids outside the tree are ignored. Returns the
    /// ids completed by this call.
    pub fn record_node_attempts(
        &mut self,
        tree: &ProgressionTree,
        attempts: &BTreeMap<String, Attempt>,
    ) -> Vec<String> {
        for (node_id, attempt) in attempts {
            if tree.node(node_id).is_some() {
                self.update_node_performance(node_id, attempt);
            } else {
                tracing::debug!("Ignoring attempt for {} outside the {} tree", node_id, tree.skill);
            }
        }
        self.advance(tree)
    }

    /// Complete every mastered node of `tree` whose prerequisites are done,
    /// then raise the skill level to the highest completed node.
    pub fn advance(&mut self, tree: &ProgressionTree) -> Vec<String> {
        let mut newly_completed = Vec::new();

        // A completion can unlock the next node, so repeat until stable.
        loop {
            let completed = self.completed(tree.skill).to_vec();
            let ready: Vec<String> = tree
                .accessible_nodes(&completed)
                .into_iter()
                .filter(|node| !completed.contains(&node.id) && self.has_mastered_node(node))
                .map(|node| node.id.clone())
                .collect();

            if ready.is_empty() {
                break;
            }
            for node_id in ready {
                tracing::info!("{} mastered {} node {}", self.id, tree.skill, node_id);
                self.complete_progression_node(tree.skill, &node_id);
                newly_completed.push(node_id);
            }
        }

        let derived = tree.highest_completed_level(self.completed(tree.skill));
        if derived > self.skill_level(tree.skill) {
            self.update_skill_level(tree.skill, derived);
        }

        newly_completed
    }

    /// Append a history entry for `session` and apply any node attempts.
    pub fn record_completion(
        &mut self,
        session: &Session,
        performance: SessionPerformance,
    ) -> &CompletionRecord {
        let workouts = session
            .workouts()
            .map(|workout| {
                let log = performance
                    .workouts
                    .get(&workout.id)
                    .cloned()
                    .unwrap_or_default();
                CompletedWorkout {
                    id: workout.id.clone(),
                    name: workout.name.clone(),
                    category: workout.category.clone(),
                    completed: !performance.skipped.contains(&workout.id),
                    notes: log.notes,
                    sets: log.sets,
                }
            })
            .collect();

        let record = CompletionRecord {
            session_id: session.id.clone(),
            date: Utc::now(),
            duration_minutes: performance
                .duration_minutes
                .unwrap_or(session.duration_minutes),
            focus_skill: session.focus_skill,
            workouts,
            rating: performance.rating,
            notes: performance.notes,
            feedback: performance.feedback,
            calories_burned: performance
                .calories_burned
                .or_else(|| self.estimate_calories(session)),
        };

        for (node_id, attempt) in &performance.node_attempts {
            self.update_node_performance(node_id, attempt);
        }

        self.history.push(record);
        self.touch();
        &self.history[self.history.len() - 1]
    }

    /// `None` until a body weight is known.
    pub fn estimate_calories(&self, session: &Session) -> Option<u32> {
        self.weight_kg
            .map(|weight| session.estimate_calories(weight))
    }

    /// Mean of all skill levels; 1 when none are recorded.
    pub fn mean_skill_level(&self) -> f64 {
        if self.skill_levels.is_empty() {
            return 1.0;
        }
        let total: u32 = self.skill_levels.values().sum();
        total as f64 / self.skill_levels.len() as f64
    }

    /// Rounded mean of all skill levels.
    pub fn overall_fitness_level(&self) -> u32 {
        self.mean_skill_level().round() as u32
    }

    /// Consecutive training days ending today, or yesterday if nothing has
    /// been logged today yet.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let days: BTreeSet<NaiveDate> = self
            .history
            .iter()
            .map(|record| record.date.date_naive())
            .collect();

        let mut day = if days.contains(&today) {
            today
        } else {
            today - Duration::days(1)
        };

        let mut streak = 0;
        while days.contains(&day) {
            streak += 1;
            day = day - Duration::days(1);
        }
        streak
    }

    /// Highest-priority skill, falling back to the highest skill level.
    /// Ties go to the skill listed first.
    pub fn primary_skill(&self) -> Skill {
        let ranked = if self.preferences.skill_priorities.is_empty() {
            &self.skill_levels
        } else {
            &self.preferences.skill_priorities
        };

        let mut best: Option<(Skill, u32)> = None;
        for (skill, value) in ranked {
            if best.map_or(true, |(_, top)| *value > top) {
                best = Some((*skill, *value));
            }
        }
        best.map(|(skill, _)| skill).unwrap_or(Skill::Handstand)
    }

    /// Project onto the plain `User` record.
    pub fn as_user(&self) -> User {
        User::new(
            self.id.clone(),
            self.primary_skill().to_string(),
            self.preferences.workout_duration,
        )
    }
}
