//! Workout catalog and skill trees.
//!
//! A catalog is read-only reference data: the workout records a session can
//! be assembled from and the progression tree for each skill. The bundled
//! data is available through [`Catalog::builtin`]; other catalogs are read
//! from JSON.

mod exercises;
mod trees;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoachError, Result};
use crate::models::{
    validate_workout, Category, ProgressionNode, ProgressionTree, Skill, Workout,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    workouts: BTreeMap<String, Workout>,
    trees: BTreeMap<Skill, ProgressionTree>,
}

/// On-disk layout: flat lists, so files stay easy to edit by hand.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    workouts: Vec<Workout>,
    #[serde(default)]
    trees: Vec<TreeFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TreeFile {
    skill: Skill,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root: Option<String>,
    #[serde(default)]
    nodes: Vec<ProgressionNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// Problem found by [`Catalog::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub severity: IssueSeverity,
    pub subject: String,
    pub message: String,
}

impl CatalogIssue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            IssueSeverity::Warning => "warning",
            IssueSeverity::Error => "error",
        };
        write!(f, "{}: {}: {}", label, self.subject, self.message)
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled exercises and the five skill trees.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for workout in exercises::builtin_workouts() {
            catalog.workouts.insert(workout.id.clone(), workout);
        }
        for tree in trees::builtin_trees() {
            catalog.trees.insert(tree.skill, tree);
        }
        catalog
    }

    pub fn add_workout(&mut self, workout: Workout) -> Result<()> {
        if self.workouts.contains_key(&workout.id) {
            return Err(CoachError::DuplicateId(workout.id));
        }
        self.workouts.insert(workout.id.clone(), workout);
        Ok(())
    }

    pub fn add_tree(&mut self, tree: ProgressionTree) -> Result<()> {
        if self.trees.contains_key(&tree.skill) {
            return Err(CoachError::DuplicateId(tree.skill.key().to_string()));
        }
        self.trees.insert(tree.skill, tree);
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for workout in file.workouts {
            catalog.add_workout(workout)?;
        }

        for tree_file in file.trees {
            let mut tree = ProgressionTree::new(tree_file.skill);
            for node in tree_file.nodes {
                tree.add_node(node)?;
            }
            if let Some(root) = tree_file.root {
                tree.set_root(&root)?;
            }
            catalog.add_tree(tree)?;
        }

        tracing::debug!(
            "Loaded catalog with {} workouts and {} trees",
            catalog.workouts.len(),
            catalog.trees.len()
        );
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let file = CatalogFile {
            workouts: self.workouts.values().cloned().collect(),
            trees: self
                .trees
                .values()
                .map(|tree| TreeFile {
                    skill: tree.skill,
                    root: tree.root.clone(),
                    nodes: tree.nodes_by_level().into_iter().cloned().collect(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn workout(&self, id: &str) -> Option<&Workout> {
        self.workouts.get(id)
    }

    pub fn require_workout(&self, id: &str) -> Result<&Workout> {
        self.workout(id)
            .ok_or_else(|| CoachError::WorkoutNotFound(id.to_string()))
    }

    /// Workouts ordered by id.
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.values()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Workout> {
        self.workouts()
            .filter(|w| w.category_kind() == Some(category))
            .collect()
    }

    pub fn by_muscle(&self, muscle: &str) -> Vec<&Workout> {
        self.workouts().filter(|w| w.targets(muscle)).collect()
    }

    pub fn tree(&self, skill: Skill) -> Option<&ProgressionTree> {
        self.trees.get(&skill)
    }

    pub fn trees(&self) -> impl Iterator<Item = &ProgressionTree> {
        self.trees.values()
    }

    /// Look for invalid records and broken references. Tree nodes pointing
    /// at workouts the catalog lacks are only warnings; those ids are
    /// skipped when a node's workouts are resolved.
    pub fn check(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for workout in self.workouts() {
            if let Err(e) = validate_workout(workout) {
                issues.push(CatalogIssue::error(format!("workout {}", workout.id), e.to_string()));
            }
        }

        for tree in self.trees() {
            match &tree.root {
                Some(root) if tree.node(root).is_none() => issues.push(CatalogIssue::error(
                    format!("{} tree", tree.skill),
                    format!("root {} is not a node of the tree", root),
                )),
                None if !tree.is_empty() => issues.push(CatalogIssue::error(
                    format!("{} tree", tree.skill),
                    "has nodes but no root",
                )),
                _ => {}
            }

            for node in tree.nodes_by_level() {
                let subject = format!("{} node {}", tree.skill, node.id);

                for prerequisite in &node.prerequisites {
                    if tree.node(prerequisite).is_none() {
                        issues.push(CatalogIssue::error(
                            subject.clone(),
                            format!("unknown prerequisite {}", prerequisite),
                        ));
                    }
                }

                for next in &node.next {
                    if tree.node(next).is_none() {
                        issues.push(CatalogIssue::error(
                            subject.clone(),
                            format!("links to unknown node {}", next),
                        ));
                    }
                }

                for workout_id in &node.workout_ids {
                    if self.workout(workout_id).is_none() {
                        issues.push(CatalogIssue::warning(
                            subject.clone(),
                            format!("references unknown workout {}", workout_id),
                        ));
                    }
                }
            }
        }

        issues
    }
}
