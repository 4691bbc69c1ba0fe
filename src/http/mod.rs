//! # HTTP Boundary
//!
//! Maps REST routes onto the generic [`routes`] handlers. Every resource kind gets its own
//! nested router with its own client as state:
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/api/{users,products,tasks}` | list (filters, `sortBy`, `order`) |
//! | POST | `/api/{kind}` | create |
//! | GET / PUT / DELETE | `/api/{kind}/:id` | fetch, replace, delete |
//! | PATCH | `/api/tasks/:id` | partial update |
//! | GET | `/health` | liveness and collection sizes |
//!
//! Anything else, including a known path with an unsupported method, answers with a 404
//! envelope.

pub mod envelope;
pub mod routes;

use crate::clients::{ProductClient, TaskClient, UserClient};
use crate::config::Environment;
use crate::error::ApiError;
use crate::lifecycle::{ApiSystem, CollectionSizes};
use crate::model::{Product, Task, User};
use axum::extract::{OriginalUri, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use envelope::{Envelope, ErrorResponse};
use routes::ResourceState;
use serde::Serialize;
use std::future::{ready, Ready};
use std::time::Instant;
use tracing::info;

/// Builds the application router on top of a running [`ApiSystem`].
pub fn router(system: &ApiSystem, environment: Environment) -> Router {
    let diagnostics = environment.exposes_diagnostics();

    let users = Router::new()
        .route(
            "/",
            get(routes::list::<User, UserClient>)
                .post(routes::create::<User, UserClient>)
                .fallback(not_found(diagnostics)),
        )
        .route(
            "/:id",
            get(routes::get::<User, UserClient>)
                .put(routes::replace::<User, UserClient>)
                .delete(routes::delete::<User, UserClient>)
                .fallback(not_found(diagnostics)),
        )
        .with_state(ResourceState {
            client: system.user_client.clone(),
            diagnostics,
        });

    let products = Router::new()
        .route(
            "/",
            get(routes::list::<Product, ProductClient>)
                .post(routes::create::<Product, ProductClient>)
                .fallback(not_found(diagnostics)),
        )
        .route(
            "/:id",
            get(routes::get::<Product, ProductClient>)
                .put(routes::replace::<Product, ProductClient>)
                .delete(routes::delete::<Product, ProductClient>)
                .fallback(not_found(diagnostics)),
        )
        .with_state(ResourceState {
            client: system.product_client.clone(),
            diagnostics,
        });

    let tasks = Router::new()
        .route(
            "/",
            get(routes::list::<Task, TaskClient>)
                .post(routes::create::<Task, TaskClient>)
                .fallback(not_found(diagnostics)),
        )
        .route(
            "/:id",
            get(routes::get::<Task, TaskClient>)
                .put(routes::replace::<Task, TaskClient>)
                .patch(routes::patch::<Task, TaskClient>)
                .delete(routes::delete::<Task, TaskClient>)
                .fallback(not_found(diagnostics)),
        )
        .with_state(ResourceState {
            client: system.task_client.clone(),
            diagnostics,
        });

    let health_routes = Router::new()
        .route("/health", get(health).fallback(not_found(diagnostics)))
        .with_state(HealthState {
            users: system.user_client.clone(),
            products: system.product_client.clone(),
            tasks: system.task_client.clone(),
            environment,
        });

    Router::new()
        .nest("/api/users", users)
        .nest("/api/products", products)
        .nest("/api/tasks", tasks)
        .merge(health_routes)
        .fallback(not_found(diagnostics))
        .layer(middleware::from_fn(log_requests))
}

/// Handler for unmatched paths and for unsupported methods on known paths.
///
/// Uses the original URI so nested routers report the full path.
fn not_found(
    diagnostics: bool,
) -> impl Fn(Method, OriginalUri) -> Ready<ErrorResponse> + Clone + Send + Sync + 'static {
    move |method: Method, OriginalUri(uri)| {
        ready(ErrorResponse::new(
            ApiError::RouteNotFound {
                method: method.to_string(),
                path: uri.path().to_string(),
            },
            diagnostics,
        ))
    }
}

#[derive(Clone)]
struct HealthState {
    users: UserClient,
    products: ProductClient,
    tasks: TaskClient,
    environment: Environment,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    environment: &'static str,
    collections: CollectionSizes,
}

async fn health(State(state): State<HealthState>) -> Result<Response, ErrorResponse> {
    let diagnostics = state.environment.exposes_diagnostics();
    let collections = CollectionSizes::gather(&state.users, &state.products, &state.tasks)
        .await
        .map_err(|e| ErrorResponse::new(e, diagnostics))?;
    Ok(Envelope::data(Health {
        status: "ok",
        environment: state.environment.as_str(),
        collections,
    })
    .respond(StatusCode::OK))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request"
    );
    response
}
