//! Headless view components.
//!
//! Each component owns a plain render model instead of DOM nodes, so a
//! front end only has to copy [`ListView`] and [`ItemView`] into its own
//! widgets and forward user events back in.

pub mod alert;
pub mod app;
pub mod drag;
pub mod form;
pub mod item;
pub mod list;

pub use alert::{Alert, LogAlert, RecordedAlerts};
pub use app::App;
pub use drag::{DataTransfer, DragTarget, Draggable, DropEffect, TEXT_PLAIN};
pub use form::{FormFields, ProjectInput};
pub use item::{ItemView, ProjectItem};
pub use list::{ListView, ProjectList};
