//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use kernel::id::{CredentialId, UserId};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AccountConfig;
use crate::application::{
    AuthOutcome, AuthenticateInput, AuthenticateUseCase, CredentialUseCase, DeleteUserUseCase,
    RegisterUserInput, RegisterUserUseCase, UpdateUserInput, UpdateUserUseCase, UserQueryUseCase,
};
use crate::domain::repository::{CredentialRepository, UserRepository};
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    AuthenticateRequest, ChangePasswordRequest, CreateUserRequest, LoginResponse,
    UpdateUserRequest, UserResponse,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Users
// ============================================================================

/// POST /api/accounts/users
pub async fn create_user<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> AccountResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterUserInput {
        name: req.name,
        cpf: req.cpf,
        birth_date: req.birth_date,
        branch: req.branch,
        email: req.email,
        job_role: req.job_role,
        password: req.password,
    };

    let user = use_case.execute(input, Utc::now().date_naive()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/accounts/users
pub async fn list_users<R>(
    State(state): State<AccountAppState<R>>,
) -> AccountResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let users = UserQueryUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /api/accounts/users/{id}
pub async fn get_user<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
) -> AccountResult<Json<UserResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let user = UserQueryUseCase::new(state.repo.clone())
        .get(&UserId::from_uuid(id))
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/accounts/users/{id}
pub async fn update_user<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> AccountResult<Json<UserResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateUserInput {
        name: req.name,
        cpf: req.cpf,
        birth_date: req.birth_date,
        branch: req.branch,
        email: req.email,
        job_role: req.job_role,
    };

    let user = use_case
        .execute(&UserId::from_uuid(id), input, Utc::now().date_naive())
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/accounts/users/{id}
pub async fn delete_user<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
) -> AccountResult<StatusCode>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    DeleteUserUseCase::new(state.repo.clone())
        .execute(&UserId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/accounts/login/authenticate
///
/// Unknown CPF and wrong password produce the same 401.
pub async fn authenticate<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<AuthenticateRequest>,
) -> AccountResult<Json<LoginResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let input = AuthenticateInput {
        cpf: req.cpf,
        password: req.password,
    };

    match use_case.execute(input).await? {
        AuthOutcome::Authenticated(credential) => Ok(Json(LoginResponse::from(&credential))),
        AuthOutcome::InvalidCredentials | AuthOutcome::NotFound => {
            Err(AccountError::InvalidCredentials)
        }
        AuthOutcome::AccountBlocked => Err(AccountError::AccountBlocked),
    }
}

/// GET /api/accounts/login
pub async fn list_logins<R>(
    State(state): State<AccountAppState<R>>,
) -> AccountResult<Json<Vec<LoginResponse>>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let credentials = CredentialUseCase::new(state.repo.clone(), state.config.clone())
        .list()
        .await?;

    Ok(Json(credentials.iter().map(LoginResponse::from).collect()))
}

/// GET /api/accounts/login/{id}
pub async fn get_login<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
) -> AccountResult<Json<LoginResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let credential = CredentialUseCase::new(state.repo.clone(), state.config.clone())
        .get(&CredentialId::from_uuid(id))
        .await?;

    Ok(Json(LoginResponse::from(&credential)))
}

/// GET /api/accounts/login/cpf/{cpf}
pub async fn get_login_by_cpf<R>(
    State(state): State<AccountAppState<R>>,
    Path(cpf): Path<String>,
) -> AccountResult<Json<LoginResponse>>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    let credential = CredentialUseCase::new(state.repo.clone(), state.config.clone())
        .get_by_cpf(&cpf)
        .await?;

    Ok(Json(LoginResponse::from(&credential)))
}

/// PUT /api/accounts/login/{id}/password
pub async fn change_password<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> AccountResult<StatusCode>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    CredentialUseCase::new(state.repo.clone(), state.config.clone())
        .change_password(&CredentialId::from_uuid(id), req.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/accounts/login/{id}/unlock
pub async fn unlock_login<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
) -> AccountResult<StatusCode>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    CredentialUseCase::new(state.repo.clone(), state.config.clone())
        .unlock(&CredentialId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/accounts/login/{id}
pub async fn delete_login<R>(
    State(state): State<AccountAppState<R>>,
    Path(id): Path<Uuid>,
) -> AccountResult<StatusCode>
where
    R: UserRepository + CredentialRepository + Clone + Send + Sync + 'static,
{
    CredentialUseCase::new(state.repo.clone(), state.config.clone())
        .delete(&CredentialId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
