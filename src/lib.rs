//! # Project Board Core
//!
//! Core state and view models for a two-column project board where
//! projects are created through a validated form and dragged between the
//! Active and Finished columns.
//!
//! This crate has no dependency on any particular UI toolkit. Components
//! expose render models and event handlers; the host wires them to real
//! widgets.

pub mod domain;
pub mod error;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use domain::{
    board::{BoardConfig, Column},
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, FieldRule, FieldValue, FormRules, Validatable},
};
pub use error::{BoardError, Result};
pub use state::ProjectState;
pub use ui::App;
