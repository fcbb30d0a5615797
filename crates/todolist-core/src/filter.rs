//! Filter type for selecting todos.

use crate::todo::Todo;

/// Selection criteria for [`TodoList::filter`](crate::list::TodoList::filter).
///
/// Every criterion that is set must hold; the default filter matches all.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    /// Filter by completion state (None = any).
    pub done: Option<bool>,

    /// Case-sensitive substring match on the title.
    pub title_contains: Option<String>,
    /// Case-sensitive substring match on the description.
    pub description_contains: Option<String>,

    /// Filter by presence of a due date (None = any).
    pub has_due_date: Option<bool>,
}

impl TodoFilter {
    pub fn done(done: bool) -> Self {
        Self {
            done: Some(done),
            ..Self::default()
        }
    }

    /// Returns `true` if `todo` satisfies every set criterion.
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(done) = self.done {
            if todo.is_done() != done {
                return false;
            }
        }
        if let Some(ref needle) = self.title_contains {
            if !todo.title.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(ref needle) = self.description_contains {
            if !todo.description.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(has_due) = self.has_due_date {
            if todo.due_date.is_some() != has_due {
                return false;
            }
        }
        true
    }
}
