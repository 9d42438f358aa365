use anyhow::{bail, Result};
use colored::Colorize;
use skill_coach::IssueSeverity;

use super::AppContext;

pub async fn check_catalog(ctx: &AppContext) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let issues = catalog.check();

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .count();
    let warnings = issues.len() - errors;

    for issue in &issues {
        let line = issue.to_string();
        match issue.severity {
            IssueSeverity::Error => println!("{}", line.red()),
            IssueSeverity::Warning => println!("{}", line.yellow()),
        }
    }

    println!(
        "Checked {} workouts and {} trees: {} error(s), {} warning(s)",
        catalog.len(),
        catalog.trees().count(),
        errors,
        warnings
    );

    if errors > 0 {
        bail!("catalog has {} error(s)", errors);
    }

    Ok(())
}
