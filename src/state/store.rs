use crate::{
    domain::{Project, ProjectId, ProjectStatus},
    state::Listener,
};
use std::{cell::RefCell, rc::Rc};

/// In-memory project list with snapshot notifications
///
/// Shared between components as `Rc<ProjectState>`. Every mutation is
/// followed by a synchronous notification: each listener, in subscription
/// order, receives its own copy of the full project sequence.
#[derive(Default)]
pub struct ProjectState {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already wrapped in the handle components share
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Registers a listener. There is no way to unsubscribe.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(Vec<Project>) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(Rc::new(listener));
        tracing::debug!(listeners = listeners.len(), "listener subscribed");
    }

    /// Appends a new active project and notifies listeners
    ///
    /// Input is stored as given; callers validate beforehand.
    pub fn add_project(&self, title: String, description: String, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        tracing::debug!(project_id = %id, people, "adding project");

        self.projects.borrow_mut().push(project);
        self.notify();
        id
    }

    /// Moves a project to `status` and notifies listeners
    ///
    /// Listeners are notified even when nothing changed, including when
    /// `id` is unknown. Returns whether the status was updated.
    pub fn move_project(&self, id: &ProjectId, status: ProjectStatus) -> bool {
        let changed = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|p| &p.id == id) {
                Some(project) => {
                    let changed = project.set_status(status);
                    tracing::debug!(project_id = %id, %status, changed, "moved project");
                    changed
                }
                None => {
                    tracing::warn!(project_id = %id, %status, "move requested for unknown project");
                    false
                }
            }
        };

        self.notify();
        changed
    }

    /// Snapshot of every project in insertion order
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .borrow()
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn project(&self, id: &ProjectId) -> Option<Project> {
        self.projects.borrow().iter().find(|p| &p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Release both borrows before calling out so listeners may read the
        // store or subscribe.
        let snapshot = self.projects();
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        tracing::trace!(
            listeners = listeners.len(),
            projects = snapshot.len(),
            "notifying listeners"
        );

        for listener in listeners {
            listener(snapshot.clone());
        }
    }
}

impl std::fmt::Debug for ProjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectState")
            .field("projects", &self.projects.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
