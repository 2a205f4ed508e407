//! Bibnotes Core Library
//!
//! Notes files for bibliographic document records: resolving their path,
//! seeding them from templates and extracted PDF text.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod notes;
pub mod store;
pub mod text;
