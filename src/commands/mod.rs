//! CLI commands for bibnotes

pub mod dispatch;
pub mod edit;
pub mod ensure;
pub mod helpers;
pub mod path;
pub mod show;
