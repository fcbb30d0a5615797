//! Core types for the todolist system.
//!
//! A [`Todo`] is a single task record; a [`TodoList`] is an ordered,
//! titled collection of them.

pub mod display;
pub mod error;
pub mod filter;
pub mod list;
pub mod todo;

pub use display::{DisplayStyle, StyleError};
pub use error::{Result, TodoListError};
pub use filter::TodoFilter;
pub use list::TodoList;
pub use todo::{Todo, TodoBuilder};
