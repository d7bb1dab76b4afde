use crate::{
    domain::{Column, Project, ProjectId, ProjectStatus},
    error::{BoardError, Result},
    state::ProjectState,
    ui::{
        drag::{DataTransfer, DragTarget, DropEffect, TEXT_PLAIN},
        item::{ItemView, ProjectItem},
    },
};
use serde::Serialize;
use std::{cell::RefCell, rc::Rc, str::FromStr};

/// Render model for a whole column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub id: String,
    pub heading: String,
    pub droppable: bool,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Default)]
struct Rendered {
    items: Vec<ProjectItem>,
    droppable: bool,
}

/// Column showing every project with one status
///
/// The list subscribes to the store when built and rebuilds its items from
/// scratch on every notification. It is also the drop target that moves a
/// dragged project into its status.
pub struct ProjectList {
    status: ProjectStatus,
    name: String,
    store: Rc<ProjectState>,
    rendered: Rc<RefCell<Rendered>>,
}

impl ProjectList {
    pub fn new(store: Rc<ProjectState>, column: &Column) -> Self {
        let status = column.status;
        let rendered = Rc::new(RefCell::new(Rendered::default()));

        let target = Rc::clone(&rendered);
        store.subscribe(move |projects| {
            Self::rebuild(&mut target.borrow_mut(), status, projects);
        });
        // Catch up with projects added before this list existed
        Self::rebuild(&mut rendered.borrow_mut(), status, store.projects());

        Self {
            status,
            name: column.name.clone(),
            store,
            rendered,
        }
    }

    /// List for `status` using the default column name
    pub fn for_status(store: Rc<ProjectState>, status: ProjectStatus) -> Self {
        Self::new(store, &Column::for_status(status))
    }

    fn rebuild(rendered: &mut Rendered, status: ProjectStatus, projects: Vec<Project>) {
        rendered.items = projects
            .into_iter()
            .filter(|p| p.status == status)
            .map(ProjectItem::new)
            .collect();
        tracing::trace!(%status, items = rendered.items.len(), "list rebuilt");
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// e.g. "ACTIVE PROJECTS"
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.name.to_uppercase())
    }

    /// e.g. "active-projects-list"
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status.as_str())
    }

    pub fn items(&self) -> Vec<ProjectItem> {
        self.rendered.borrow().items.clone()
    }

    pub fn item(&self, id: &ProjectId) -> Option<ProjectItem> {
        self.rendered
            .borrow()
            .items
            .iter()
            .find(|item| &item.project().id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rendered.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.borrow().items.is_empty()
    }

    /// Whether a drag is currently hovering with acceptable data
    pub fn is_droppable(&self) -> bool {
        self.rendered.borrow().droppable
    }

    pub fn render(&self) -> ListView {
        let rendered = self.rendered.borrow();
        ListView {
            id: self.list_id(),
            heading: self.heading(),
            droppable: rendered.droppable,
            items: rendered.items.iter().map(ProjectItem::render).collect(),
        }
    }

    fn set_droppable(&self, droppable: bool) {
        self.rendered.borrow_mut().droppable = droppable;
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&self, transfer: &mut DataTransfer) -> bool {
        if !transfer.has_type(TEXT_PLAIN) {
            return false;
        }
        transfer.drop_effect = DropEffect::Move;
        self.set_droppable(true);
        true
    }

    fn handle_drop(&self, transfer: &DataTransfer) -> Result<()> {
        self.set_droppable(false);

        let raw = transfer
            .get_data(TEXT_PLAIN)
            .ok_or(BoardError::UnsupportedDragData)?;
        let id = ProjectId::from_str(raw)?;

        tracing::debug!(project_id = %id, status = %self.status, "project dropped");
        self.store.move_project(&id, self.status);
        Ok(())
    }

    fn drag_leave(&self) {
        self.set_droppable(false);
    }
}

impl std::fmt::Debug for ProjectList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectList")
            .field("status", &self.status)
            .field("name", &self.name)
            .field("rendered", &self.rendered.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::drag::Draggable;

    fn board() -> (Rc<ProjectState>, ProjectList, ProjectList) {
        let store = ProjectState::shared();
        let active = ProjectList::for_status(Rc::clone(&store), ProjectStatus::Active);
        let finished = ProjectList::for_status(Rc::clone(&store), ProjectStatus::Finished);
        (store, active, finished)
    }

    #[test]
    fn test_heading_and_id() {
        let (_, active, finished) = board();
        assert_eq!(active.heading(), "ACTIVE PROJECTS");
        assert_eq!(active.list_id(), "active-projects-list");
        assert_eq!(finished.heading(), "FINISHED PROJECTS");
        assert_eq!(finished.list_id(), "finished-projects-list");
    }

    #[test]
    fn test_lists_filter_by_status() {
        let (store, active, finished) = board();
        store.add_project("A".to_string(), "desc1".to_string(), 1);
        store.add_project("B".to_string(), "desc2".to_string(), 2);

        assert_eq!(active.len(), 2);
        assert!(finished.is_empty());
    }

    #[test]
    fn test_list_catches_up_on_creation() {
        let store = ProjectState::shared();
        store.add_project("A".to_string(), "desc1".to_string(), 1);

        let active = ProjectList::for_status(Rc::clone(&store), ProjectStatus::Active);
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_drag_from_active_drop_on_finished() {
        let (store, active, finished) = board();
        let id = store.add_project("A".to_string(), "desc1".to_string(), 1);

        let mut transfer = DataTransfer::new();
        active.item(&id).unwrap().drag_start(&mut transfer);

        assert!(finished.drag_over(&mut transfer));
        assert!(finished.is_droppable());
        assert_eq!(transfer.drop_effect, DropEffect::Move);

        finished.handle_drop(&transfer).unwrap();

        assert!(!finished.is_droppable());
        assert!(active.is_empty());
        assert_eq!(finished.len(), 1);
        assert_eq!(finished.items()[0].project().id, id);
    }

    #[test]
    fn test_drag_over_rejects_other_types() {
        let (_, active, _) = board();
        let mut transfer = DataTransfer::new();
        transfer.set_data("text/html", "<p>nope</p>");

        assert!(!active.drag_over(&mut transfer));
        assert!(!active.is_droppable());
    }

    #[test]
    fn test_drag_leave_clears_highlight() {
        let (_, active, _) = board();
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "whatever");

        active.drag_over(&mut transfer);
        assert!(active.is_droppable());
        active.drag_leave();
        assert!(!active.is_droppable());
    }

    #[test]
    fn test_drop_without_payload_is_rejected() {
        let (store, _, finished) = board();
        store.add_project("A".to_string(), "desc1".to_string(), 1);

        let err = finished.handle_drop(&DataTransfer::new()).unwrap_err();
        assert!(matches!(err, BoardError::UnsupportedDragData));
        assert!(finished.is_empty());
    }

    #[test]
    fn test_failed_drop_clears_highlight() {
        let (store, _, finished) = board();
        store.add_project("A".to_string(), "desc1".to_string(), 1);

        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "   ");
        assert!(finished.drag_over(&mut transfer));
        assert!(finished.is_droppable());

        let err = finished.handle_drop(&transfer).unwrap_err();
        assert!(matches!(err, BoardError::InvalidProjectId(_)));
        assert!(!finished.is_droppable());
        assert!(finished.is_empty());
    }

    #[test]
    fn test_drop_unknown_id_rerenders_without_change() {
        let (store, active, finished) = board();
        store.add_project("A".to_string(), "desc1".to_string(), 1);

        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, "nonexistent-id");
        finished.handle_drop(&transfer).unwrap();

        assert_eq!(active.len(), 1);
        assert!(finished.is_empty());
    }

    #[test]
    fn test_render_view() {
        let (store, active, _) = board();
        store.add_project("A".to_string(), "desc1".to_string(), 1);

        let view = active.render();
        assert_eq!(view.id, "active-projects-list");
        assert_eq!(view.heading, "ACTIVE PROJECTS");
        assert!(!view.droppable);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].persons, "1 person assigned");
    }
}
