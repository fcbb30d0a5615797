//! Text rendering settings for todos and todo lists.
//!
//! The [`Default`] style produces the canonical rendering:
//!
//! ```text
//! ---- Today ----
//! [ ] Clean
//! [X] Cook (Due: Friday January 6)
//! ```

use std::fmt::Write;

use chrono::NaiveDate;

/// Marker rendered between brackets for a completed todo.
pub const DONE_MARKER: &str = "X";

/// Marker rendered between brackets for an open todo.
pub const UNDONE_MARKER: &str = " ";

/// Fence placed on both sides of a list title in the banner line.
pub const BANNER_FENCE: &str = "----";

/// strftime pattern for due dates, e.g. `Friday January 6`.
pub const DUE_DATE_FORMAT: &str = "%A %B %-d";

/// Errors returned when building a [`DisplayStyle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("marker must be exactly one character (got {width} in {marker:?})")]
    InvalidMarker { marker: String, width: usize },

    #[error("not a valid date pattern: {0:?}")]
    InvalidDueDateFormat(String),
}

/// Controls how [`Todo`](crate::todo::Todo) and
/// [`TodoList`](crate::list::TodoList) are rendered as text.
///
/// Markers are always exactly one character and the due-date pattern always
/// renders a date; the `with_*` setters reject anything else.
///
/// ```
/// use todolist_core::DisplayStyle;
///
/// let style = DisplayStyle::default().with_done_marker("*").unwrap();
/// assert_eq!(style.marker(true), "*");
/// assert!(DisplayStyle::default().with_done_marker("OK").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStyle {
    done_marker: String,
    undone_marker: String,
    banner_fence: String,
    due_date_format: String,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            done_marker: DONE_MARKER.to_owned(),
            undone_marker: UNDONE_MARKER.to_owned(),
            banner_fence: BANNER_FENCE.to_owned(),
            due_date_format: DUE_DATE_FORMAT.to_owned(),
        }
    }
}

impl DisplayStyle {
    pub fn with_done_marker(mut self, marker: impl Into<String>) -> Result<Self, StyleError> {
        self.done_marker = checked_marker(marker.into())?;
        Ok(self)
    }

    pub fn with_undone_marker(mut self, marker: impl Into<String>) -> Result<Self, StyleError> {
        self.undone_marker = checked_marker(marker.into())?;
        Ok(self)
    }

    pub fn with_banner_fence(mut self, fence: impl Into<String>) -> Self {
        self.banner_fence = fence.into();
        self
    }

    /// Sets the chrono strftime pattern used for due dates.
    pub fn with_due_date_format(mut self, pattern: impl Into<String>) -> Result<Self, StyleError> {
        let pattern = pattern.into();
        if !Self::is_valid_due_date_format(&pattern) {
            return Err(StyleError::InvalidDueDateFormat(pattern));
        }
        self.due_date_format = pattern;
        Ok(self)
    }

    pub fn done_marker(&self) -> &str {
        &self.done_marker
    }

    pub fn undone_marker(&self) -> &str {
        &self.undone_marker
    }

    pub fn banner_fence(&self) -> &str {
        &self.banner_fence
    }

    pub fn due_date_format(&self) -> &str {
        &self.due_date_format
    }

    /// Returns the marker for the given completion state.
    pub fn marker(&self, done: bool) -> &str {
        if done {
            &self.done_marker
        } else {
            &self.undone_marker
        }
    }

    /// Returns the banner line for a list title, without a newline.
    pub fn banner(&self, title: &str) -> String {
        format!("{fence} {title} {fence}", fence = self.banner_fence)
    }

    /// Returns the ` (Due: ...)` suffix for a due date.
    pub fn due_suffix(&self, date: NaiveDate) -> String {
        format!(" (Due: {})", date.format(&self.due_date_format))
    }

    /// Returns `true` if `pattern` renders a bare calendar date.
    ///
    /// Time and zone specifiers (`%H`, `%z`, ...) parse but cannot render a
    /// [`NaiveDate`], so they are rejected too.
    pub fn is_valid_due_date_format(pattern: &str) -> bool {
        let mut rendered = String::new();
        !pattern.is_empty() && write!(rendered, "{}", NaiveDate::MIN.format(pattern)).is_ok()
    }
}

fn checked_marker(marker: String) -> Result<String, StyleError> {
    let width = marker.chars().count();
    if width != 1 {
        return Err(StyleError::InvalidMarker { marker, width });
    }
    Ok(marker)
}
