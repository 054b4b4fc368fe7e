//! Account Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the Account router with PostgreSQL repository
pub fn account_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/users",
            post(handlers::create_user::<R>).get(handlers::list_users::<R>),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route("/login", get(handlers::list_logins::<R>))
        .route("/login/authenticate", post(handlers::authenticate::<R>))
        .route("/login/cpf/{cpf}", get(handlers::get_login_by_cpf::<R>))
        .route(
            "/login/{id}",
            get(handlers::get_login::<R>).delete(handlers::delete_login::<R>),
        )
        .route("/login/{id}/password", put(handlers::change_password::<R>))
        .route("/login/{id}/unlock", post(handlers::unlock_login::<R>))
        .with_state(state)
}
