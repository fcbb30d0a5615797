//! Todo struct -- a single task record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::DisplayStyle;

/// A single task with a title, a description, a done flag and an optional
/// due date.
///
/// Equality compares title, description and done; the due date is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    pub done: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    /// Creates an open todo with an empty description.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_description(title, "")
    }

    /// Creates an open todo with the given description.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            done: false,
            due_date: None,
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Renders the todo with a custom [`DisplayStyle`].
    ///
    /// The [`Display`](fmt::Display) impl uses the default style.
    pub fn render(&self, style: &DisplayStyle) -> String {
        let mut out = format!("[{}] {}", style.marker(self.done), self.title);
        if let Some(date) = self.due_date {
            out.push_str(&style.due_suffix(date));
        }
        out
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.done == other.done
    }
}

impl Eq for Todo {}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayStyle::default()))
    }
}

/// Builder for constructing a [`Todo`] with a fluent API.
pub struct TodoBuilder {
    todo: Todo,
}

impl TodoBuilder {
    /// Creates a new builder with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            todo: Todo::new(title),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.todo.description = description.into();
        self
    }

    pub fn done(mut self, done: bool) -> Self {
        self.todo.done = done;
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.todo.due_date = Some(date);
        self
    }

    /// Consumes the builder and returns the constructed [`Todo`].
    pub fn build(self) -> Todo {
        self.todo
    }
}
