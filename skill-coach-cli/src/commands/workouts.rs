use anyhow::Result;
use colored::Colorize;
use skill_coach::format::format_workout;
use skill_coach::{Category, Workout};

use super::AppContext;

pub async fn list_workouts(
    ctx: &AppContext,
    category: Option<String>,
    muscle: Option<String>,
    level: Option<i32>,
) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let category: Option<Category> = category.map(|c| c.parse::<Category>()).transpose()?;

    let workouts: Vec<&Workout> = catalog
        .workouts()
        .filter(|w| category.map_or(true, |c| w.category_kind() == Some(c)))
        .filter(|w| muscle.as_deref().map_or(true, |m| w.targets(m)))
        .filter(|w| level.map_or(true, |l| w.is_suitable_for_level(l)))
        .collect();

    tracing::debug!("{} of {} workouts match", workouts.len(), catalog.len());

    if workouts.is_empty() {
        println!("No workouts match.");
        return Ok(());
    }

    println!("{}", "Workouts".bold());
    println!();
    for workout in workouts {
        println!(
            "  {:<20} {:<9} {}",
            workout.id,
            workout.category,
            format_workout(workout)
        );
    }

    Ok(())
}

pub async fn show_workout(ctx: &AppContext, id: &str) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let workout = catalog.require_workout(id)?;

    println!("{}", workout.name.bold());
    println!("  ID:       {}", workout.id);
    println!("  Category: {}", workout.category);
    println!("  Level:    {}", workout.progression_level);

    let muscles = if workout.muscles().is_empty() {
        "-".to_string()
    } else {
        workout.muscles().join(", ")
    };
    println!("  Muscles:  {}", muscles);
    println!(
        "  Video:    {}",
        workout.video_url.as_deref().unwrap_or("-")
    );

    let used_by: Vec<String> = catalog
        .trees()
        .flat_map(|tree| tree.nodes.values())
        .filter(|node| node.workout_ids.iter().any(|w| w == id))
        .map(|node| node.to_string())
        .collect();
    if !used_by.is_empty() {
        println!();
        println!("Used by:");
        for node in used_by {
            println!("  {}", node);
        }
    }

    Ok(())
}
