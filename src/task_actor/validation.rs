//! Body and query-parameter rules for tasks.

use crate::error::ApiError;
use crate::model::{DueDate, TaskCreate, TaskFilter, TaskPriority, TaskStatus, TaskUpdate};
use crate::resource::{param, QueryParams};
use crate::validation::Fields;
use serde_json::Value;

/// Fields a partial update may carry.
pub const PATCHABLE_FIELDS: [&str; 5] = ["title", "description", "status", "priority", "dueDate"];

pub fn validate_create(body: &Value) -> Result<TaskCreate, ApiError> {
    let update = validate_replace(body)?;
    Ok(TaskCreate {
        title: update.title.unwrap_or_default(),
        description: update.description.unwrap_or_default(),
        status: update.status.unwrap_or_default(),
        priority: update.priority.unwrap_or_default(),
        due_date: update.due_date.flatten(),
    })
}

/// Full replace: `title` is mandatory, the other fields are applied when present.
pub fn validate_replace(body: &Value) -> Result<TaskUpdate, ApiError> {
    let fields = Fields::new(body)?;
    let title = fields.required_text("title")?;
    Ok(TaskUpdate {
        title: Some(title),
        ..optional_fields(&fields)?
    })
}

/// Partial update: at least one recognized field, each checked only when present.
pub fn validate_patch(body: &Value) -> Result<TaskUpdate, ApiError> {
    let fields = Fields::new(body)?;
    fields.require_any(&PATCHABLE_FIELDS)?;
    let title = fields.text("title")?;
    Ok(TaskUpdate {
        title,
        ..optional_fields(&fields)?
    })
}

fn optional_fields(fields: &Fields<'_>) -> Result<TaskUpdate, ApiError> {
    Ok(TaskUpdate {
        title: None,
        description: fields.free_text("description")?,
        status: fields.choice("status", &TaskStatus::ALL)?,
        priority: fields.choice("priority", &TaskPriority::ALL)?,
        due_date: fields
            .date("dueDate")?
            .map(|date| date.map(DueDate::new_unchecked)),
    })
}

/// `status` and `priority`; values that name no declared variant are ignored.
pub fn parse_filter(params: &QueryParams) -> TaskFilter {
    TaskFilter {
        status: param(params, "status").and_then(|raw| raw.parse().ok()),
        priority: param(params, "priority").and_then(|raw| raw.parse().ok()),
    }
}
