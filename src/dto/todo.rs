use crate::domain;
use chrono::{DateTime, NaiveDateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// DTO for a todo returned from the API
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Learn ASP.NET Core")]
    pub name: String,
    pub due_date: DateTime<Utc>,
    #[schema(example = false)]
    pub is_completed: bool,
}

impl From<domain::todo::Todo> for TodoItem {
    fn from(value: domain::todo::Todo) -> Self {
        TodoItem {
            id: value.id,
            name: value.name,
            due_date: value.due_date,
            is_completed: value.is_completed,
        }
    }
}

/// DTO for creating a todo via the API. The client picks the id.
#[derive(Debug, Deserialize, Display, ToSchema)]
#[display("todo {id} ({name:?}) due {due_date}")]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(Serialize))]
pub struct NewTodo {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Write the docs")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_due_date")]
    pub due_date: DateTime<Utc>,
    #[schema(example = false)]
    pub is_completed: bool,
}

/// Reads an RFC 3339 timestamp. Timestamps without an offset are taken to be UTC.
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_due_date(&raw).map_err(de::Error::custom)
}

fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(with_offset) => Ok(with_offset.with_timezone(&Utc)),
        Err(_) => raw.parse::<NaiveDateTime>().map(|naive| naive.and_utc()),
    }
}

impl NewTodo {
    /// Checks the payload against the clock reading [now]. Problems are keyed by the
    /// JSON name of the offending field so clients can map them back onto their form.
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.due_date < now {
            errors.add(
                "dueDate",
                field_error("due_date_in_past", "Due date cannot be in the past."),
            );
        }
        if self.is_completed {
            errors.add(
                "isCompleted",
                field_error("already_completed", "Cannot add a completed todo."),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for NewTodo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(Utc::now())
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

impl From<NewTodo> for domain::todo::Todo {
    fn from(value: NewTodo) -> Self {
        domain::todo::Todo {
            id: value.id,
            name: value.name,
            due_date: value.due_date,
            is_completed: value.is_completed,
        }
    }
}
