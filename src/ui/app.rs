use crate::{
    domain::{BoardConfig, ProjectId, ProjectStatus},
    error::Result,
    state::ProjectState,
    ui::{
        alert::Alert,
        drag::{DataTransfer, DragTarget, Draggable},
        form::ProjectInput,
        list::{ListView, ProjectList},
    },
};
use std::rc::Rc;

/// Composition root: one store, one input form and one list per column
#[derive(Debug)]
pub struct App {
    config: BoardConfig,
    store: Rc<ProjectState>,
    input: ProjectInput,
    lists: Vec<ProjectList>,
}

impl App {
    pub fn new(config: BoardConfig, alert: Box<dyn Alert>) -> Result<Self> {
        config.validate()?;

        let store = ProjectState::shared();
        let input = ProjectInput::new(Rc::clone(&store), config.form.clone(), alert);
        let lists = config
            .columns
            .iter()
            .map(|column| ProjectList::new(Rc::clone(&store), column))
            .collect();

        tracing::debug!(board = %config.name, columns = config.columns.len(), "board mounted");
        Ok(Self {
            config,
            store,
            input,
            lists,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &Rc<ProjectState> {
        &self.store
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn lists(&self) -> &[ProjectList] {
        &self.lists
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    /// Drags the project's item from whichever list shows it and drops it
    /// on the list for `target`
    ///
    /// Returns `Ok(false)` when no list shows the project or no list exists
    /// for `target`, or the target refused the drag.
    pub fn drag_and_drop(&self, id: &ProjectId, target: ProjectStatus) -> Result<bool> {
        let Some(item) = self.lists.iter().find_map(|list| list.item(id)) else {
            return Ok(false);
        };
        let Some(target) = self.list(target) else {
            return Ok(false);
        };

        let mut transfer = DataTransfer::new();
        item.drag_start(&mut transfer);
        if !target.drag_over(&mut transfer) {
            target.drag_leave();
            return Ok(false);
        }
        target.handle_drop(&transfer)?;
        Ok(true)
    }

    pub fn render(&self) -> Vec<ListView> {
        self.lists.iter().map(ProjectList::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Column, FormRules},
        error::BoardError,
        ui::alert::{LogAlert, RecordedAlerts},
    };

    fn app() -> App {
        App::new(BoardConfig::default(), Box::new(RecordedAlerts::new())).unwrap()
    }

    #[test]
    fn test_app_builds_lists_from_config() {
        let app = app();
        assert_eq!(app.lists().len(), 2);
        assert_eq!(app.store().listener_count(), 2);
        assert!(app.list(ProjectStatus::Active).is_some());
        assert!(app.list(ProjectStatus::Finished).is_some());
    }

    #[test]
    fn test_app_keeps_config_and_logs_rejected_input() {
        let config = BoardConfig {
            name: "Sprint".to_string(),
            ..BoardConfig::default()
        };
        let mut app = App::new(config, Box::new(LogAlert)).unwrap();
        assert_eq!(app.config().name, "Sprint");
        assert_eq!(app.config().form, FormRules::default());

        let input = app.input_mut();
        input.set_title("A");
        input.set_description("desc");
        input.set_people("2");
        assert!(matches!(input.submit(), Err(BoardError::InvalidInput)));
        assert!(app.store().is_empty());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = BoardConfig {
            columns: Vec::new(),
            ..BoardConfig::default()
        };
        let err = App::new(config, Box::new(RecordedAlerts::new())).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_submit_then_drag_to_finished() {
        let mut app = app();
        let input = app.input_mut();
        input.set_title("A");
        input.set_description("desc1");
        input.set_people("3");
        let id = input.submit().unwrap();

        assert_eq!(app.list(ProjectStatus::Active).unwrap().len(), 1);

        assert!(app.drag_and_drop(&id, ProjectStatus::Finished).unwrap());

        assert!(app.list(ProjectStatus::Active).unwrap().is_empty());
        assert_eq!(app.list(ProjectStatus::Finished).unwrap().len(), 1);

        let views = app.render();
        assert_eq!(views[1].items[0].id, id.as_str());
    }

    #[test]
    fn test_drag_without_target_column() {
        let config = BoardConfig {
            columns: vec![Column::for_status(ProjectStatus::Active)],
            ..BoardConfig::default()
        };
        let app = App::new(config, Box::new(RecordedAlerts::new())).unwrap();
        let id = app
            .store()
            .add_project("A".to_string(), "desc1".to_string(), 1);

        assert!(!app.drag_and_drop(&id, ProjectStatus::Finished).unwrap());
        assert_eq!(app.list(ProjectStatus::Active).unwrap().len(), 1);
    }
}
