// Plain-text rendering of sessions, workouts and skill trees

use crate::models::{Category, MasteryCriteria, ProgressionTree, Session, Workout};

pub fn difficulty_label(level: u32) -> &'static str {
    match level {
        0..=3 => "beginner",
        4..=6 => "intermediate",
        _ => "advanced",
    }
}

pub fn format_workout(workout: &Workout) -> String {
    format!("{} (Level {})", workout.name, workout.progression_level)
}

/// Render a session section by section. `detailed` adds muscle groups and
/// video links under each workout.
pub fn format_session(session: &Session, detailed: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "WORKOUT PLAN: {} ({} minutes)\n",
        difficulty_label(session.difficulty).to_uppercase(),
        session.duration_minutes
    ));
    let focus = session
        .focus_skill
        .map(|skill| skill.to_string())
        .unwrap_or_else(|| "General".to_string());
    out.push_str(&format!("Focus: {}\n", focus));
    out.push('\n');

    for category in Category::ALL {
        out.push_str(&format!(
            "== {} ({} minutes) ==\n",
            category,
            session.section_duration(category)
        ));

        let workouts = session.section(category);
        if workouts.is_empty() {
            out.push_str("No exercises in this section.\n\n");
            continue;
        }

        for (index, workout) in workouts.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, format_workout(workout)));
            if detailed {
                if !workout.muscles().is_empty() {
                    out.push_str(&format!("   Targets: {}\n", workout.muscles().join(", ")));
                }
                if let Some(ref url) = workout.video_url {
                    out.push_str(&format!("   Video: {}\n", url));
                }
            }
        }
        out.push('\n');
    }

    out
}

pub fn describe_criteria(criteria: &MasteryCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(reps) = criteria.reps {
        parts.push(format!("{} reps", reps));
    }
    if let Some(hold) = criteria.hold_time {
        parts.push(format!("{}s hold", hold));
    }
    if let Some(successes) = criteria.consecutive_successes {
        parts.push(format!("{} sessions in a row", successes));
    }
    if parts.is_empty() {
        "no criteria".to_string()
    } else {
        parts.join(", ")
    }
}

/// One line per node, lowest level first, with mastery criteria and the
/// nodes that follow.
pub fn format_tree(tree: &ProgressionTree) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} progression ({} steps)\n", tree.skill, tree.len()));

    if tree.is_empty() {
        out.push_str("No progression steps defined yet.\n");
        return out;
    }

    for node in tree.nodes_by_level() {
        let marker = if tree.root.as_deref() == Some(node.id.as_str()) {
            "*"
        } else {
            "-"
        };
        out.push_str(&format!(
            "{} L{} {} [{}]: {}\n",
            marker,
            node.level,
            node.name,
            node.id,
            describe_criteria(&node.criteria)
        ));
        if !node.next.is_empty() {
            out.push_str(&format!("    next: {}\n", node.next.join(", ")));
        }
    }

    out
}
