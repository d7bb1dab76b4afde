use crate::{
    domain::{FieldValue, FormRules, ProjectId},
    error::{BoardError, Result, INVALID_INPUT_MESSAGE},
    state::ProjectState,
    ui::alert::Alert,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Raw text currently typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Values that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectInputValues {
    title: String,
    description: String,
    people: u32,
}

/// Form that adds new projects to the store
pub struct ProjectInput {
    store: Rc<ProjectState>,
    rules: FormRules,
    alert: Box<dyn Alert>,
    fields: FormFields,
}

impl ProjectInput {
    pub fn new(store: Rc<ProjectState>, rules: FormRules, alert: Box<dyn Alert>) -> Self {
        Self {
            store,
            rules,
            alert,
            fields: FormFields::default(),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.fields.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.fields.description = description.into();
    }

    pub fn set_people(&mut self, people: impl Into<String>) {
        self.fields.people = people.into();
    }

    pub fn clear(&mut self) {
        self.fields = FormFields::default();
    }

    /// Validates the fields and adds the project
    ///
    /// On failure the user is alerted, the fields are kept as typed and the
    /// store is left alone.
    pub fn submit(&mut self) -> Result<ProjectId> {
        let Some(values) = self.gather() else {
            tracing::debug!(fields = ?self.fields, "project form rejected");
            self.alert.alert(INVALID_INPUT_MESSAGE);
            return Err(BoardError::InvalidInput);
        };

        let id = self
            .store
            .add_project(values.title, values.description, values.people);
        self.clear();
        Ok(id)
    }

    fn gather(&self) -> Option<ProjectInputValues> {
        let people_text = self.fields.people.trim();
        let people_value = match people_text.parse::<f64>() {
            Ok(n) => FieldValue::Number(n),
            Err(_) => FieldValue::Text(people_text.to_string()),
        };

        let valid = self.rules.title.check(self.fields.title.as_str())
            && self.rules.description.check(self.fields.description.as_str())
            && self.rules.people.check(people_value.clone());
        if !valid {
            return None;
        }

        let people = match people_value {
            FieldValue::Number(n) => whole_people(n)?,
            FieldValue::Text(_) => return None,
        };

        Some(ProjectInputValues {
            title: self.fields.title.clone(),
            description: self.fields.description.clone(),
            people,
        })
    }
}

/// A head count must be a positive whole number
fn whole_people(n: f64) -> Option<u32> {
    if n.is_finite() && n.fract() == 0.0 && n >= 1.0 && n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

impl std::fmt::Debug for ProjectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectInput")
            .field("rules", &self.rules)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
