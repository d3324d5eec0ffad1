use sqlx::AnyPool;

use crate::db;
use crate::errors::AppError;
use crate::models::{self, Account, CreateAccount, UpdateAccount};

// Random 20-digit numbers collide with vanishing probability; the retry
// bound only exists so a broken generator cannot loop forever.
const NUMBER_RETRIES: u32 = 5;

fn require(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!(
            "Account {} cannot be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

pub async fn create(pool: &AnyPool, input: CreateAccount) -> Result<Account, AppError> {
    let name = require("name", &input.name)?;
    let currency = require("currency", &input.currency)?;
    let country = require("country", &input.country)?;

    let mut account = Account::new(name, currency, country);
    for _ in 0..NUMBER_RETRIES {
        if db::account_queries::find_by_account_number(pool, &account.account_number)
            .await?
            .is_none()
        {
            let account = db::account_queries::insert(pool, account).await?;
            return Ok(account);
        }
        account.account_number = models::generate_account_number();
    }
    Err(AppError::Internal(
        "could not allocate a unique account number".to_string(),
    ))
}

pub async fn fetch_all(pool: &AnyPool) -> Result<Vec<Account>, AppError> {
    let accounts = db::account_queries::fetch_all(pool).await?;
    Ok(accounts)
}

pub async fn fetch_one(pool: &AnyPool, id: i64) -> Result<Account, AppError> {
    let account = db::account_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;
    Ok(account)
}

/// Applies only the fields present in the body; id, account_number and
/// created_at are immutable after creation.
pub async fn update(pool: &AnyPool, id: i64, input: UpdateAccount) -> Result<Account, AppError> {
    let mut account = db::account_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;

    if let Some(name) = input.name {
        account.name = require("name", &name)?;
    }
    if let Some(currency) = input.currency {
        account.currency = require("currency", &currency)?;
    }
    if let Some(country) = input.country {
        account.country = require("country", &country)?;
    }
    if let Some(balance) = input.balance {
        account.balance = balance;
    }
    if let Some(status) = input.status {
        account.status = status;
    }

    let account = db::account_queries::update(pool, id, &account)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;
    Ok(account)
}

pub async fn delete(pool: &AnyPool, id: i64) -> Result<(), AppError> {
    match db::account_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound(format!("Account {} not found", id))),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_surrounding_whitespace() {
        assert_eq!(require("name", "  John Doe ").unwrap(), "John Doe");
    }

    #[test]
    fn require_rejects_blank_values() {
        let err = require("currency", "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
