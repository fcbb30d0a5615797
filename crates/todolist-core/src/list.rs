//! [`TodoList`] -- an ordered, titled collection of todos.

use std::any::{Any, type_name};
use std::fmt;

use tracing::debug;

use crate::display::DisplayStyle;
use crate::error::{Result, TodoListError};
use crate::filter::TodoFilter;
use crate::todo::Todo;

/// An ordered collection of [`Todo`]s under a title.
///
/// Insertion order is preserved. Selections ([`select`](Self::select),
/// [`all_done`](Self::all_done), ...) return new lists holding clones, so
/// mutating a selection never touches the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    pub title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Removes and returns the first todo, or `None` if the list is empty.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            return None;
        }
        let todo = self.todos.remove(0);
        debug!(list = %self.title, len = self.todos.len(), "shifted todo");
        Some(todo)
    }

    /// Removes and returns the last todo, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<Todo> {
        let todo = self.todos.pop()?;
        debug!(list = %self.title, len = self.todos.len(), "popped todo");
        Some(todo)
    }

    /// Returns `true` if every todo is done. An empty list counts as done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Appends a todo and returns the list for chaining.
    pub fn add(&mut self, todo: Todo) -> &mut Self {
        self.todos.push(todo);
        debug!(list = %self.title, len = self.todos.len(), "added todo");
        self
    }

    /// Appends a dynamically typed value, which must be a [`Todo`].
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::TypeMismatch`] for any other type; the list
    /// is left unchanged.
    pub fn try_add<T: Any>(&mut self, item: T) -> Result<&mut Self> {
        let boxed: Box<dyn Any> = Box::new(item);
        match boxed.downcast::<Todo>() {
            Ok(todo) => Ok(self.add(*todo)),
            Err(_) => {
                let found = type_name::<T>();
                debug!(list = %self.title, found, "rejected non-todo value");
                Err(TodoListError::TypeMismatch { found })
            }
        }
    }

    /// Returns the todo at `index`.
    ///
    /// Indices count from the front only; there is no negative indexing
    /// from the end. Use [`last`](Self::last) for the final todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] if `index >= len()`.
    pub fn item_at(&self, index: usize) -> Result<&Todo> {
        let len = self.todos.len();
        self.todos
            .get(index)
            .ok_or(TodoListError::IndexOutOfRange { index, len })
    }

    /// Mutable counterpart of [`item_at`](Self::item_at).
    pub fn item_at_mut(&mut self, index: usize) -> Result<&mut Todo> {
        let len = self.todos.len();
        self.todos
            .get_mut(index)
            .ok_or(TodoListError::IndexOutOfRange { index, len })
    }

    pub fn mark_done_at(&mut self, index: usize) -> Result<()> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&mut self, index: usize) -> Result<()> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    /// Removes and returns the todo at `index`, shifting later todos down.
    ///
    /// Removal is positional: with equal todos at several positions, only
    /// the one at `index` is removed.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        let len = self.todos.len();
        if index >= len {
            debug!(list = %self.title, index, len, "remove_at out of range");
            return Err(TodoListError::IndexOutOfRange { index, len });
        }
        let todo = self.todos.remove(index);
        debug!(list = %self.title, index, len = self.todos.len(), "removed todo");
        Ok(todo)
    }

    pub fn mark_all_done(&mut self) {
        self.each_mut(Todo::mark_done);
        debug!(list = %self.title, len = self.todos.len(), "marked all done");
    }

    pub fn mark_all_undone(&mut self) {
        self.each_mut(Todo::mark_undone);
        debug!(list = %self.title, len = self.todos.len(), "marked all undone");
    }

    /// Renders the banner line followed by one line per todo.
    pub fn render(&self, style: &DisplayStyle) -> String {
        let mut out = style.banner(&self.title);
        out.push('\n');
        let lines: Vec<String> = self.todos.iter().map(|t| t.render(style)).collect();
        out.push_str(&lines.join("\n"));
        out
    }

    /// Returns the underlying todos in order.
    pub fn to_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Todo> {
        self.todos.iter_mut()
    }

    /// Calls `visitor` once per todo, in order, and returns the list.
    pub fn each(&self, mut visitor: impl FnMut(&Todo)) -> &Self {
        for todo in &self.todos {
            visitor(todo);
        }
        self
    }

    /// Like [`each`](Self::each), but the visitor may modify each todo.
    ///
    /// The list itself is borrowed for the whole traversal, so the visitor
    /// can change todos but never add or remove them:
    ///
    /// ```compile_fail
    /// use todolist_core::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Today");
    /// list.add(Todo::new("Clean"));
    /// list.each_mut(|_| {
    ///     list.add(Todo::new("Cook"));
    /// });
    /// ```
    ///
    /// ```compile_fail
    /// use todolist_core::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Today");
    /// list.add(Todo::new("Clean"));
    /// list.each(|_| {
    ///     list.pop();
    /// });
    /// ```
    pub fn each_mut(&mut self, mut visitor: impl FnMut(&mut Todo)) -> &mut Self {
        for todo in &mut self.todos {
            visitor(todo);
        }
        self
    }

    /// Returns a new list with the same title holding clones of the todos
    /// for which `predicate` returns `true`, in their original order.
    pub fn select(&self, mut predicate: impl FnMut(&Todo) -> bool) -> TodoList {
        let mut list = TodoList::new(self.title.clone());
        self.each(|todo| {
            if predicate(todo) {
                list.todos.push(todo.clone());
            }
        });
        list
    }

    /// [`select`](Self::select) driven by a [`TodoFilter`].
    pub fn filter(&self, filter: &TodoFilter) -> TodoList {
        self.select(|todo| filter.matches(todo))
    }

    /// Returns the first todo with exactly this title.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title == title)
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.title == title)
    }

    pub fn all_done(&self) -> TodoList {
        self.select(Todo::is_done)
    }

    pub fn all_not_done(&self) -> TodoList {
        self.select(|todo| !todo.is_done())
    }

    /// Marks the first todo with this title as done.
    ///
    /// Returns `false` (and changes nothing) if no todo matches.
    pub fn mark_done(&mut self, title: &str) -> bool {
        match self.find_by_title_mut(title) {
            Some(todo) => {
                todo.mark_done();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayStyle::default()))
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, iter: I) {
        for todo in iter {
            self.add(todo);
        }
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl<'a> IntoIterator for &'a mut TodoList {
    type Item = &'a mut Todo;
    type IntoIter = std::slice::IterMut<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter_mut()
    }
}
