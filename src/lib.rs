// Calisthenics skill progression data model.
// Records, catalog, skill trees, user progress and assembled sessions.

pub mod catalog;
pub mod error;
pub mod format;
pub mod models;

pub use catalog::{Catalog, CatalogIssue, IssueSeverity};
pub use error::{CoachError, Result};
pub use models::*;
