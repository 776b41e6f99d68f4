//! The route dispatcher.
//!
//! Maps (method, path) pairs onto page renders or the validation workflow
//! followed by a store mutation and a redirect. Handlers carry no business
//! logic beyond existence checks.

pub mod handlers;

use crate::flash::FlashStore;
use crate::repositories::ContactRepository;
use crate::validation::ContactWorkflow;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactRepository>,
    pub workflow: ContactWorkflow,
    pub flash: Arc<FlashStore>,
}

impl AppState {
    /// Wire up the workflow and flash store around a contact repository.
    pub fn new(store: Arc<dyn ContactRepository>) -> Self {
        Self {
            workflow: ContactWorkflow::new(store.clone()),
            store,
            flash: Arc::new(FlashStore::new()),
        }
    }
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/contacts", get(handlers::list_contacts))
        .route("/detail-contact", get(handlers::detail_contact))
        .route(
            "/add-contact",
            get(handlers::show_add_form).post(handlers::submit_add),
        )
        .route("/delete-contact", get(handlers::delete_contact))
        .route(
            "/edit-contact",
            get(handlers::show_edit_form).post(handlers::submit_edit),
        )
        .route("/about", get(handlers::about))
        .with_state(state)
}

/// Bind the listener and serve until shutdown.
pub async fn run_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "contact book listening");
    axum::serve(listener, app).await?;
    Ok(())
}
