use crate::clients::{ProductClient, TaskClient, UserClient};
use crate::error::ApiError;
use resource_actor::ActorClient;
use serde::Serialize;
use tracing::{error, info};

/// Number of stored entities per kind, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionSizes {
    pub users: usize,
    pub products: usize,
    pub tasks: usize,
}

impl CollectionSizes {
    pub async fn gather(
        users: &UserClient,
        products: &ProductClient,
        tasks: &TaskClient,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            users: users.count().await?,
            products: products.count().await?,
            tasks: tasks.count().await?,
        })
    }
}

/// Runs the user, product and task actors.
///
/// # Example
///
/// ```ignore
/// let system = ApiSystem::new(32);
/// let task = system.task_client.create(TaskCreate::new("Write docs")).await?;
/// system.shutdown().await?;
/// ```
pub struct ApiSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub task_client: TaskClient,

    /// Actor tasks, joined on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ApiSystem {
    /// Creates every actor with a mailbox of `channel_capacity` requests and starts it.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(channel_capacity: usize) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(channel_capacity);
        let (product_actor, product_client) = crate::product_actor::new(channel_capacity);
        let (task_actor, task_client) = crate::task_actor::new(channel_capacity);

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(task_actor.run(())),
        ];

        Self {
            user_client,
            product_client,
            task_client,
            handles,
        }
    }

    pub async fn sizes(&self) -> Result<CollectionSizes, ApiError> {
        CollectionSizes::gather(&self.user_client, &self.product_client, &self.task_client).await
    }

    /// Drops the clients and waits for every actor to finish.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.user_client);
        drop(self.product_client);
        drop(self.task_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
