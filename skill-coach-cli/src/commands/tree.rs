use anyhow::Result;
use skill_coach::format::format_tree;
use skill_coach::Skill;

use super::AppContext;

pub async fn show_tree(ctx: &AppContext, skill: &str) -> Result<()> {
    let skill: Skill = skill.parse()?;
    let catalog = ctx.catalog().await?;

    match catalog.tree(skill) {
        Some(tree) => print!("{}", format_tree(tree)),
        None => println!("No progression tree for {} in this catalog.", skill),
    }

    Ok(())
}
