use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::error::{CoachError, Result};
use crate::models::{NodePerformance, Workout};

/// Calisthenics skills that have a progression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "handstand")]
    Handstand,
    #[serde(rename = "planche")]
    Planche,
    #[serde(rename = "lsit")]
    LSit,
    #[serde(rename = "frontLever")]
    FrontLever,
    #[serde(rename = "backLever")]
    BackLever,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Handstand,
        Skill::Planche,
        Skill::LSit,
        Skill::FrontLever,
        Skill::BackLever,
    ];

    /// Stable key used in catalog files and profile exports.
    pub fn key(self) -> &'static str {
        match self {
            Skill::Handstand => "handstand",
            Skill::Planche => "planche",
            Skill::LSit => "lsit",
            Skill::FrontLever => "frontLever",
            Skill::BackLever => "backLever",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skill::Handstand => write!(f, "Handstand"),
            Skill::Planche => write!(f, "Planche"),
            Skill::LSit => write!(f, "L-Sit"),
            Skill::FrontLever => write!(f, "Front Lever"),
            Skill::BackLever => write!(f, "Back Lever"),
        }
    }
}

impl std::str::FromStr for Skill {
    type Err = CoachError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "handstand" => Ok(Skill::Handstand),
            "planche" => Ok(Skill::Planche),
            "lsit" => Ok(Skill::LSit),
            "frontlever" => Ok(Skill::FrontLever),
            "backlever" => Ok(Skill::BackLever),
            _ => Err(CoachError::UnknownSkill(s.to_string())),
        }
    }
}

/// Thresholds a user must reach before a node counts as mastered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_successes: Option<u32>,
}

impl MasteryCriteria {
    pub fn reps(reps: u32) -> Self {
        Self {
            reps: Some(reps),
            ..Self::default()
        }
    }

    pub fn hold(seconds: u32) -> Self {
        Self {
            hold_time: Some(seconds),
            ..Self::default()
        }
    }

    pub fn with_consecutive_successes(mut self, count: u32) -> Self {
        self.consecutive_successes = Some(count);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.reps.is_none() && self.hold_time.is_none() && self.consecutive_successes.is_none()
    }
}

/// One step of a skill progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionNode {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub skill: Skill,
    #[serde(default)]
    pub workout_ids: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub criteria: MasteryCriteria,
    /// Ids of the nodes that follow this one.
    #[serde(default)]
    pub next: Vec<String>,
}

impl ProgressionNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: u32, skill: Skill) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            skill,
            workout_ids: Vec::new(),
            prerequisites: Vec::new(),
            criteria: MasteryCriteria::default(),
            next: Vec::new(),
        }
    }

    pub fn with_workouts(mut self, ids: &[&str]) -> Self {
        self.workout_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_prerequisites(mut self, ids: &[&str]) -> Self {
        self.prerequisites = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn with_criteria(mut self, criteria: MasteryCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Every prerequisite appears in `completed`.
    pub fn is_accessible(&self, completed: &[String]) -> bool {
        self.prerequisites.iter().all(|req| completed.contains(req))
    }

    /// A node without criteria can never be mastered.
    pub fn has_mastered(&self, performance: Option<&NodePerformance>) -> bool {
        let perf = match performance {
            Some(perf) => perf,
            None => return false,
        };

        if self.criteria.is_empty() {
            return false;
        }

        if let Some(reps) = self.criteria.reps {
            if perf.max_reps < reps {
                return false;
            }
        }

        if let Some(hold_time) = self.criteria.hold_time {
            if perf.max_time < hold_time {
                return false;
            }
        }

        if let Some(successes) = self.criteria.consecutive_successes {
            if perf.consecutive_successes < successes {
                return false;
            }
        }

        true
    }

    /// Catalog records for this node; ids missing from the catalog are skipped.
    pub fn workouts<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Workout> {
        self.workout_ids
            .iter()
            .filter_map(|id| catalog.workout(id))
            .collect()
    }
}

impl std::fmt::Display for ProgressionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Level {}) - Skill: {}", self.name, self.level, self.skill)
    }
}

/// How far above the current skill level a node may be and still be
/// offered.
pub const LEVEL_REACH: u32 = 2;

/// Directed progression graph for a single skill. Nodes link by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionTree {
    pub skill: Skill,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub nodes: BTreeMap<String, ProgressionNode>,
}

impl ProgressionTree {
    pub fn new(skill: Skill) -> Self {
        Self {
            skill,
            root: None,
            nodes: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node. The first node added becomes the root unless one is set.
    pub fn add_node(&mut self, node: ProgressionNode) -> Result<()> {
        if node.skill != self.skill {
            return Err(CoachError::validation(
                "skill",
                format!("node {} belongs to {} not {}", node.id, node.skill, self.skill),
            ));
        }
        if self.nodes.contains_key(&node.id) {
            return Err(CoachError::DuplicateId(node.id));
        }
        if self.root.is_none() {
            self.root = Some(node.id.clone());
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    pub fn set_root(&mut self, id: &str) -> Result<()> {
        self.require(id)?;
        self.root = Some(id.to_string());
        Ok(())
    }

    /// Record that `to` follows `from`. Linking twice is a no-op.
    pub fn link(&mut self, from: &str, to: &str) -> Result<()> {
        self.require(to)?;
        let skill = self.skill;
        let node = self
            .nodes
            .get_mut(from)
            .ok_or_else(|| CoachError::NodeNotFound {
                skill,
                node_id: from.to_string(),
            })?;
        if !node.next.iter().any(|id| id == to) {
            node.next.push(to.to_string());
        }
        Ok(())
    }

    fn require(&self, id: &str) -> Result<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(CoachError::NodeNotFound {
                skill: self.skill,
                node_id: id.to_string(),
            })
        }
    }

    pub fn node(&self, id: &str) -> Option<&ProgressionNode> {
        self.nodes.get(id)
    }

    pub fn root_node(&self) -> Option<&ProgressionNode> {
        self.root.as_deref().and_then(|id| self.node(id))
    }

    pub fn next_nodes(&self, id: &str) -> Vec<&ProgressionNode> {
        self.node(id)
            .map(|node| node.next.iter().filter_map(|next| self.node(next)).collect())
            .unwrap_or_default()
    }

    /// Nodes ordered by level, then id.
    pub fn nodes_by_level(&self) -> Vec<&ProgressionNode> {
        let mut nodes: Vec<&ProgressionNode> = self.nodes.values().collect();
        nodes.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.id.cmp(&b.id)));
        nodes
    }

    pub fn node_at_level(&self, level: u32) -> Option<&ProgressionNode> {
        self.nodes_by_level().into_iter().find(|node| node.level == level)
    }

    /// Nodes whose prerequisites are all completed, lowest level first.
    pub fn accessible_nodes(&self, completed: &[String]) -> Vec<&ProgressionNode> {
        self.nodes_by_level()
            .into_iter()
            .filter(|node| node.is_accessible(completed))
            .collect()
    }

    /// Lowest-level node that is accessible, not yet completed and within
    /// reach of `level`.
    pub fn next_node(&self, completed: &[String], level: u32) -> Option<&ProgressionNode> {
        self.accessible_nodes(completed)
            .into_iter()
            .find(|node| !completed.contains(&node.id) && node.level <= level + LEVEL_REACH)
    }

    /// Depth-first walk from the root along `next` links, following only
    /// nodes that are accessible and within reach of `level`. A node with
    /// several parents appears once, where it is first reached.
    pub fn progression_path(&self, completed: &[String], level: u32) -> Vec<&ProgressionNode> {
        let mut path = Vec::new();
        let mut visited = BTreeSet::new();
        if let Some(root) = self.root_node() {
            self.walk(root, completed, level, &mut visited, &mut path);
        }
        path
    }

    fn walk<'a>(
        &'a self,
        node: &'a ProgressionNode,
        completed: &[String],
        level: u32,
        visited: &mut BTreeSet<&'a str>,
        path: &mut Vec<&'a ProgressionNode>,
    ) {
        if !visited.insert(node.id.as_str()) {
            return;
        }
        path.push(node);

        for next in self.next_nodes(&node.id) {
            if next.is_accessible(completed) && next.level <= level + LEVEL_REACH {
                self.walk(next, completed, level, visited, path);
            }
        }
    }

    /// Highest level among completed nodes of this tree, never below 1.
    pub fn highest_completed_level(&self, completed: &[String]) -> u32 {
        completed
            .iter()
            .filter_map(|id| self.node(id))
            .map(|node| node.level)
            .fold(1, u32::max)
    }
}
