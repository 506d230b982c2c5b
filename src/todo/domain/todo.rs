//! Todo aggregate root and edit parameter object.

use super::{TodoDomainError, TodoId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// Field mutation happens only through the methods below, which keep the
/// `updated_at` timestamp in step with the record: it refreshes exactly
/// when a field other than `id` / `created_at` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    text: String,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new active todo from raw user text.
    ///
    /// The text is trimmed before validation; the record starts with an
    /// empty description, `completed = false`, and matching creation and
    /// update timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyText`] when the text trims to empty.
    pub fn new(text: &str, clock: &impl Clock) -> Result<Self, TodoDomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyText);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TodoId::new(),
            text: trimmed.to_owned(),
            description: String::new(),
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the todo text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the optional free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Flips the completion flag and refreshes `updated_at`.
    pub fn toggle(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Applies an edit, trimming string fields first.
    ///
    /// The edit is validated as a whole: when the new text trims to empty
    /// no field mutates, including a description carried by the same edit.
    /// Returns `true` when any field actually changed; `updated_at`
    /// refreshes only in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyText`] when the edit carries text
    /// that trims to empty.
    pub fn apply_edit(
        &mut self,
        edit: &TodoEdit,
        clock: &impl Clock,
    ) -> Result<bool, TodoDomainError> {
        let new_text = edit
            .text
            .as_deref()
            .map(str::trim)
            .map(|trimmed| {
                if trimmed.is_empty() {
                    Err(TodoDomainError::EmptyText)
                } else {
                    Ok(trimmed)
                }
            })
            .transpose()?;
        let new_description = edit.description.as_deref().map(str::trim);

        let mut changed = false;
        if let Some(text) = new_text
            && text != self.text
        {
            text.clone_into(&mut self.text);
            changed = true;
        }
        if let Some(description) = new_description
            && description != self.description
        {
            description.clone_into(&mut self.description);
            changed = true;
        }
        if changed {
            self.touch(clock);
        }
        Ok(changed)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Parameter object carrying the optional fields of a todo edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEdit {
    text: Option<String>,
    description: Option<String>,
}

impl TodoEdit {
    /// Creates an edit that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: None,
            description: None,
        }
    }

    /// Sets replacement text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets a replacement description. An empty value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
