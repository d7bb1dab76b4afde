//! Drag-and-drop handoff between project items and lists.
//!
//! A [`DataTransfer`] travels from a [`Draggable`] source to a
//! [`DragTarget`]. Projects are identified by their id stored under the
//! `text/plain` MIME type.

use serde::{Deserialize, Serialize};

pub const TEXT_PLAIN: &str = "text/plain";

/// Kind of operation a drag performs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropEffect {
    #[default]
    None,
    Move,
}

/// Data attached to a drag operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous value
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let format = format.to_ascii_lowercase();
        let data = data.into();
        match self.entries.iter_mut().find(|(f, _)| *f == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format, data)),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f.eq_ignore_ascii_case(format))
            .map(|(_, data)| data.as_str())
    }

    /// MIME types present, in the order they were first set
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    pub fn has_type(&self, format: &str) -> bool {
        self.types().any(|f| f.eq_ignore_ascii_case(format))
    }

    pub fn clear_data(&mut self) {
        self.entries.clear();
    }
}

/// A component that can be dragged
pub trait Draggable {
    fn drag_start(&self, transfer: &mut DataTransfer);
}

/// A component that accepts drops
pub trait DragTarget {
    /// Returns `true` when the target accepts the transfer, which allows
    /// the drop to happen.
    fn drag_over(&self, transfer: &mut DataTransfer) -> bool;

    fn handle_drop(&self, transfer: &DataTransfer) -> crate::error::Result<()>;

    fn drag_leave(&self);
}
