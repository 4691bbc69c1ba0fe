use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity, FrameworkError, ListQuery, ResourceActor, ResourceClient, Sort};
use std::cmp::Ordering;
use std::str::FromStr;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    title: String,
    open: bool,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug)]
struct TicketUpdate {
    title: Option<String>,
    open: Option<bool>,
}

#[derive(Debug, Default)]
struct TicketFilter {
    open: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
enum TicketSort {
    Title,
}

impl FromStr for TicketSort {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "title" => Ok(TicketSort::Title),
            _ => Err(()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("ticket {0} not found")]
    NotFound(String),
    #[error("{0}")]
    Framework(String),
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Filter = TicketFilter;
    type SortField = TicketSort;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, TicketError> {
        Ok(Self {
            id,
            title: params.title,
            open: true,
        })
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), TicketError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(open) = update.open {
            self.open = open;
        }
        Ok(())
    }

    fn matches(&self, filter: &TicketFilter) -> bool {
        filter.open.map_or(true, |open| self.open == open)
    }

    fn compare_by(&self, other: &Self, field: TicketSort) -> Ordering {
        match field {
            TicketSort::Title => self.title.cmp(&other.title),
        }
    }
}

// --- Client Wrapper ---

struct TicketClient {
    inner: ResourceClient<Ticket>,
}

#[async_trait]
impl ActorClient<Ticket> for TicketClient {
    type Error = TicketError;

    fn inner(&self) -> &ResourceClient<Ticket> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> TicketError {
        match e {
            FrameworkError::NotFound(id) => TicketError::NotFound(id),
            other => TicketError::Framework(other.to_string()),
        }
    }
}

fn create(title: &str) -> TicketCreate {
    TicketCreate {
        title: title.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let created: Ticket = client.create(create("Write docs")).await.unwrap();
    assert_eq!(created.id, 1); // First ID should be 1
    assert!(created.open);

    // 2. Read
    let fetched: Ticket = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    // 3. Update (partial: title untouched)
    let updated = client
        .update(
            created.id,
            TicketUpdate {
                title: None,
                open: Some(false),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Write docs");
    assert!(!updated.open);

    // 4. Delete
    let removed = client.delete(created.id).await.unwrap();
    assert_eq!(removed, updated);
    assert!(client.get(created.id).await.unwrap().is_none());

    // 5. Shutdown once every client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_wrapper_filters_and_sorts() {
    let (actor, inner) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));
    let client = TicketClient { inner };

    for title in ["gamma", "alpha", "beta"] {
        client.create(create(title)).await.unwrap();
    }
    client
        .update(
            3,
            TicketUpdate {
                title: None,
                open: Some(false),
            },
        )
        .await
        .unwrap();

    let open_sorted = client
        .list(ListQuery::new(
            TicketFilter { open: Some(true) },
            Sort::from_params(Some("title"), None),
        ))
        .await
        .unwrap();
    let titles: Vec<&str> = open_sorted.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["alpha", "gamma"]);
    assert_eq!(client.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_client_wrapper_maps_not_found() {
    let (actor, inner) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));
    let client = TicketClient { inner };

    assert!(matches!(client.delete(42).await, Err(TicketError::NotFound(id)) if id == "42"));
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Ticket>::new(1);
    drop(actor);
    assert!(matches!(
        client.create(create("late")).await,
        Err(FrameworkError::ActorClosed)
    ));
}
