use crate::domain::Project;
use std::rc::Rc;

pub mod store;

pub use store::ProjectState;

/// Callback invoked with a fresh snapshot after every store mutation
pub type Listener = Rc<dyn Fn(Vec<Project>)>;
