use sqlx::AnyPool;

use crate::models::Account;

pub async fn fetch_all(pool: &AnyPool) -> Result<Vec<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, account_number, name, currency, country, balance, status, created_at
         FROM accounts
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &AnyPool, id: i64) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, account_number, name, currency, country, balance, status, created_at
         FROM accounts
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_account_number(
    pool: &AnyPool,
    account_number: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, account_number, name, currency, country, balance, status, created_at
         FROM accounts
         WHERE account_number = $1",
    )
    .bind(account_number)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &AnyPool, input: Account) -> Result<Account, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "INSERT INTO accounts (account_number, name, currency, country, balance, status, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id, account_number, name, currency, country, balance, status, created_at",
    )
    .bind(input.account_number)
    .bind(input.name)
    .bind(input.currency)
    .bind(input.country)
    .bind(input.balance)
    .bind(input.status.to_string())
    .bind(input.created_at.to_rfc3339())
    .fetch_one(pool)
    .await
}

/// Writes the mutable columns back; account_number and created_at stay as
/// inserted. Returns None when the id does not exist.
pub async fn update(
    pool: &AnyPool,
    id: i64,
    input: &Account,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "UPDATE accounts
         SET name = $1, currency = $2, country = $3, balance = $4, status = $5
         WHERE id = $6
         RETURNING id, account_number, name, currency, country, balance, status, created_at",
    )
    .bind(input.name.clone())
    .bind(input.currency.clone())
    .bind(input.country.clone())
    .bind(input.balance)
    .bind(input.status.to_string())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &AnyPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
