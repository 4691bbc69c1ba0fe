//! [`ActorEntity`] implementation for [`Task`].

use crate::error::ApiError;
use crate::model::{Task, TaskCreate, TaskFilter, TaskId, TaskSortField, TaskUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::cmp::Ordering;

#[async_trait]
impl ActorEntity for Task {
    type Id = TaskId;
    type Create = TaskCreate;
    type Update = TaskUpdate;
    type Filter = TaskFilter;
    type SortField = TaskSortField;
    type Context = ();
    type Error = ApiError;

    fn from_create_params(id: TaskId, params: TaskCreate) -> Result<Self, ApiError> {
        let now = Utc::now();
        Ok(Self {
            id,
            title: params.title,
            description: params.description,
            status: params.status,
            priority: params.priority,
            due_date: params.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies the present fields and always refreshes `updated_at`.
    async fn on_update(&mut self, update: TaskUpdate, _ctx: &()) -> Result<(), ApiError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn matches(&self, filter: &TaskFilter) -> bool {
        filter.status.map_or(true, |status| self.status == status)
            && filter.priority.map_or(true, |priority| self.priority == priority)
    }

    fn compare_by(&self, other: &Self, field: TaskSortField) -> Ordering {
        match field {
            TaskSortField::Title => self.title.cmp(&other.title),
            TaskSortField::Status => self.status.rank().cmp(&other.status.rank()),
            TaskSortField::Priority => self.priority.rank().cmp(&other.priority.rank()),
            // Tasks without a due date go last.
            TaskSortField::DueDate => match (&self.due_date, &other.due_date) {
                (Some(a), Some(b)) => a.sort_key().cmp(&b.sort_key()),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            TaskSortField::CreatedAt => self.created_at.cmp(&other.created_at),
            TaskSortField::UpdatedAt => self.updated_at.cmp(&other.updated_at),
        }
    }
}
