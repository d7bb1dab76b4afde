pub mod board;
pub mod project;
pub mod validation;

pub use board::{BoardConfig, Column};
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{validate, FieldRule, FieldValue, FormRules, Validatable};
