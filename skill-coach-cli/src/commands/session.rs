use anyhow::Result;
use clap::Args;
use skill_coach::format::format_session;
use skill_coach::{Session, Skill};

use super::AppContext;

#[derive(Args)]
pub struct SessionCommand {
    /// Workout IDs, placed into sections by their category
    #[arg(required = true)]
    workouts: Vec<String>,

    /// Skill the session focuses on
    #[arg(short, long)]
    skill: Option<String>,

    /// Session length in minutes (defaults to the configured duration)
    #[arg(short, long)]
    duration: Option<u32>,

    /// Show muscle groups and video links
    #[arg(long)]
    detailed: bool,
}

impl SessionCommand {
    pub async fn execute(self, ctx: &AppContext) -> Result<()> {
        let catalog = ctx.catalog().await?;
        let focus: Option<Skill> = self.skill.as_deref().map(str::parse::<Skill>).transpose()?;
        let duration = self
            .duration
            .unwrap_or(ctx.config.profile.default_duration);

        let mut session = Session::new(focus, duration, 1);
        for id in &self.workouts {
            let workout = catalog.require_workout(id)?;
            session.place(workout.clone())?;
        }
        session.difficulty = session.average_level().max(1) as u32;

        tracing::debug!(
            "Assembled {} with {} workouts",
            session.id,
            session.workout_count()
        );

        print!(
            "{}",
            format_session(&session, self.detailed || ctx.config.ui.detailed)
        );

        if let Some(weight) = ctx.config.profile.weight_kg {
            println!(
                "Estimated calories: {} kcal at {} kg",
                session.estimate_calories(weight),
                weight
            );
        }

        Ok(())
    }
}
