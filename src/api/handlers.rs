//! API Handlers
//!
//! HTTP request handlers for each demo endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::SharedStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, SearchQuery, StatsResponse, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Builds the service over a fresh store from configuration.
    pub fn from_config(config: &Config, store: SharedStore) -> Result<Self> {
        let repository = UserRepository::seeded(config.max_user_id);
        Ok(Self::new(UserService::new(store, repository)?))
    }
}

/// Handler for GET /users/:id
pub async fn user_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    let user = state.users.user_by_id(id).await?;
    Ok(Json(user))
}

/// Handler for GET /users/search
pub async fn user_search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<User>> {
    let user = state.users.user_by_name(&query.name, &query.team).await?;
    Ok(Json(user))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.users.store().stats().await;
    Json(StatsResponse::new(&stats, state.users.repository().lookups()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
