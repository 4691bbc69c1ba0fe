//! Demo records loaded at startup.
//!
//! Seeding goes through the normal create path, so ids start at 1 and follow the usual rules.

use crate::error::ApiError;
use crate::lifecycle::ApiSystem;
use crate::model::{DueDate, ProductCreate, TaskCreate, TaskPriority, TaskStatus, UserCreate};
use resource_actor::ActorClient;
use tracing::info;

pub async fn seed_demo_data(system: &ApiSystem) -> Result<(), ApiError> {
    for (name, email) in [
        ("John Doe", "john@example.com"),
        ("Jane Smith", "jane@example.com"),
    ] {
        system
            .user_client
            .create(UserCreate {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;
    }

    for (name, description, price, category, stock) in [
        ("Laptop", "High-performance laptop", 999.99, "electronics", 10),
        ("Desk Chair", "Ergonomic office chair", 199.99, "furniture", 25),
        ("Coffee Mug", "Ceramic coffee mug", 12.5, "kitchen", 100),
    ] {
        system
            .product_client
            .create(ProductCreate {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                stock,
            })
            .await?;
    }

    let tasks = [
        TaskCreate {
            description: "Write the project README".to_string(),
            priority: TaskPriority::High,
            due_date: Some(DueDate::new_unchecked("2025-01-15")),
            ..TaskCreate::new("Write documentation")
        },
        TaskCreate {
            description: "Cover the API with integration tests".to_string(),
            status: TaskStatus::InProgress,
            ..TaskCreate::new("Add tests")
        },
        TaskCreate {
            description: "Ship the first release".to_string(),
            priority: TaskPriority::Low,
            due_date: Some(DueDate::new_unchecked("2025-02-01")),
            ..TaskCreate::new("Deploy")
        },
    ];
    for task in tasks {
        system.task_client.create(task).await?;
    }

    info!(users = 2, products = 3, tasks = 3, "Seeded demo data");
    Ok(())
}
