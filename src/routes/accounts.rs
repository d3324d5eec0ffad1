use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{Account, AccountList, CreateAccount, UpdateAccount};
use crate::services::account_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account).get(list_accounts))
        .route("/accounts/:id", get(get_account))
        .route("/accounts/:id", put(update_account))
        .route("/accounts/:id", delete(delete_account))
}

#[axum::debug_handler]
pub async fn create_account(
    State(state): State<AppState>,
    Json(data): Json<CreateAccount>,
) -> Result<Json<Account>, AppError> {
    info!("POST /accounts - Creating new account");
    let account = account_service::create(&state.pool, data).await.map_err(|e| {
        error!("Failed to create account: {}", e);
        e
    })?;
    Ok(Json(account))
}

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<AccountList>, AppError> {
    info!("GET /accounts - Fetching all accounts");
    let accounts = account_service::fetch_all(&state.pool).await.map_err(|e| {
        error!("Failed to fetch accounts: {}", e);
        e
    })?;
    Ok(Json(AccountList { accounts }))
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, AppError> {
    info!("GET /accounts/{} - Fetching account", id);
    let account = account_service::fetch_one(&state.pool, id).await.map_err(|e| {
        error!("Failed to fetch account {}: {}", id, e);
        e
    })?;
    Ok(Json(account))
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateAccount>,
) -> Result<Json<Account>, AppError> {
    info!("PUT /accounts/{} - Updating account", id);
    let account = account_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update account {}: {}", id, e);
            e
        })?;
    Ok(Json(account))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<()>, AppError> {
    info!("DELETE /accounts/{} - Deleting account", id);
    account_service::delete(&state.pool, id).await.map_err(|e| {
        error!("Failed to delete account {}: {}", id, e);
        e
    })?;
    Ok(Json(()))
}
