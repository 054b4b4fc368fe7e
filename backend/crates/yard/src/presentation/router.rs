//! Yard Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::YardConfig;
use crate::domain::repository::{GatewayRepository, YardRepository, ZoneRepository};
use crate::infra::postgres::PgYardRepository;
use crate::presentation::handlers::{self, YardAppState};

/// Create the Yard router with PostgreSQL repository
pub fn yard_router(repo: PgYardRepository, config: YardConfig) -> Router {
    yard_router_generic(repo, config)
}

/// Create a generic Yard router for any repository implementation
pub fn yard_router_generic<R>(repo: R, config: YardConfig) -> Router
where
    R: YardRepository + ZoneRepository + GatewayRepository + Clone + Send + Sync + 'static,
{
    let state = YardAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/yards",
            get(handlers::list_yards::<R>).post(handlers::create_yard::<R>),
        )
        .route(
            "/yards/{id}",
            get(handlers::get_yard::<R>)
                .put(handlers::update_yard::<R>)
                .delete(handlers::delete_yard::<R>),
        )
        .route(
            "/zones",
            get(handlers::list_zones::<R>).post(handlers::create_zone::<R>),
        )
        .route(
            "/zones/{id}",
            get(handlers::get_zone::<R>)
                .put(handlers::update_zone::<R>)
                .delete(handlers::delete_zone::<R>),
        )
        .route(
            "/gateways",
            get(handlers::list_gateways::<R>).post(handlers::create_gateway::<R>),
        )
        .route(
            "/gateways/{id}",
            get(handlers::get_gateway::<R>)
                .put(handlers::update_gateway::<R>)
                .delete(handlers::delete_gateway::<R>),
        )
        .with_state(state)
}
