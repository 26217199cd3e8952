use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{demo, expenses, groups, settlement};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    /// Single shared store: one writer at a time, many readers.
    pub engine: Arc<RwLock<Engine>>,
    /// Expose `POST /demo/reset`.
    pub demo: bool,
}

impl ServerState {
    pub fn new(engine: Engine, demo: bool) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            demo,
        }
    }
}

pub fn router(state: ServerState) -> Router {
    let mut router = Router::new()
        .route("/groups", post(groups::create))
        .route("/groups/{group_id}", get(groups::get))
        .route("/groups/{group_id}/members", post(groups::add_member))
        .route(
            "/groups/{group_id}/members/{member_id}",
            delete(groups::remove_member),
        )
        .route(
            "/groups/{group_id}/expenses",
            get(expenses::list).post(expenses::add),
        )
        .route("/groups/{group_id}/settlement", get(settlement::get));

    if state.demo {
        router = router.route("/demo/reset", post(demo::reset));
    }

    router.with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    demo: bool,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine, demo))).await
}
