// Library exports for the skill-coach CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
