use crate::{
    domain::Project,
    ui::drag::{DataTransfer, Draggable, DropEffect, TEXT_PLAIN},
};
use serde::Serialize;

/// Render model for a single project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub persons: String,
    pub description: String,
    pub draggable: bool,
}

/// One rendered project inside a list
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// "1 person assigned" or "N persons assigned"
    pub fn persons_label(&self) -> String {
        if self.project.people == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.project.people)
        }
    }

    pub fn render(&self) -> ItemView {
        ItemView {
            id: self.project.id.to_string(),
            title: self.project.title.clone(),
            persons: self.persons_label(),
            description: self.project.description.clone(),
            draggable: true,
        }
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, transfer: &mut DataTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project.id.as_str());
        transfer.effect_allowed = DropEffect::Move;
        tracing::trace!(project_id = %self.project.id, "drag started");
    }
}
