//! # Task Client

use crate::error::ApiError;
use crate::model::Task;
use crate::resource::Resource;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Task actor.
#[derive(Clone)]
pub struct TaskClient {
    inner: ResourceClient<Task>,
}

impl TaskClient {
    pub fn new(inner: ResourceClient<Task>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Task> for TaskClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<Task> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ApiError {
        ApiError::from_framework(Task::KIND, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TaskId, TaskUpdate};
    use resource_actor::mock::{create_mock_client, expect_delete, expect_update};

    #[tokio::test]
    async fn test_actor_not_found_is_named_after_the_kind() {
        let (inner, mut receiver) = create_mock_client::<Task>(4);
        let client = TaskClient::new(inner);

        let call = tokio::spawn(async move { client.delete(TaskId(7)).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let error = call.await.unwrap().unwrap_err();
        assert_eq!(
            error,
            ApiError::NotFound {
                kind: "Task",
                id: "7".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_entity_errors_pass_through() {
        let (inner, mut receiver) = create_mock_client::<Task>(4);
        let client = TaskClient::new(inner);

        let call = tokio::spawn(async move {
            client.update(TaskId(1), TaskUpdate::default()).await
        });

        let (_, _, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ApiError::validation("title cannot be empty"),
            ))))
            .unwrap();

        assert_eq!(
            call.await.unwrap().unwrap_err(),
            ApiError::Validation("title cannot be empty".to_string())
        );
    }
}
