use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::Row;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ACCOUNT_NUMBER_LEN: usize = 20;

// Represents a single bank account holder record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub account_number: String,
    pub name: String,
    pub currency: String,
    pub country: String,
    pub balance: f64,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of an account. Only `Active` is assigned by the service;
/// the remaining variants are settable through administrative update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Frozen,
    Closed,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountStatus::Active => "active",
            AccountStatus::Frozen => "frozen",
            AccountStatus::Closed => "closed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
#[error("unknown account status: {0}")]
pub struct ParseStatusError(String);

impl FromStr for AccountStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "frozen" => Ok(AccountStatus::Frozen),
            "closed" => Ok(AccountStatus::Closed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Request body for POST /accounts. Fields default to empty strings so a
/// missing field surfaces as a 400 validation error rather than a
/// deserialization rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccount {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub country: String,
}

/// Request body for PUT /accounts/:id. Absent fields are left untouched;
/// id, account_number and created_at are never updatable.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateAccount {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub country: Option<String>,
    pub balance: Option<f64>,
    pub status: Option<AccountStatus>,
}

/// Response wrapper for GET /accounts.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountList {
    pub accounts: Vec<Account>,
}

impl Account {
    /// Builds a fresh account ready for insertion; `id` stays 0 until the
    /// database assigns the real key.
    pub fn new(name: String, currency: String, country: String) -> Self {
        Self {
            id: 0,
            account_number: generate_account_number(),
            name,
            currency,
            country,
            balance: 0.0,
            status: AccountStatus::Active,
            created_at: Utc::now(),
        }
    }
}

/// 20 random decimal digits. Collisions are re-drawn by the service and
/// backstopped by the UNIQUE column constraint.
pub fn generate_account_number() -> String {
    let mut rng = rand::rng();
    (0..ACCOUNT_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

// The Any driver only decodes scalar column types, so timestamps travel as
// RFC 3339 text and the status as its lowercase name.
impl<'r> sqlx::FromRow<'r, AnyRow> for Account {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<AccountStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        let created_at: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "created_at".to_string(),
                source: Box::new(e),
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: row.try_get("id")?,
            account_number: row.try_get("account_number")?,
            name: row.try_get("name")?,
            currency: row.try_get("currency")?,
            country: row.try_get("country")?,
            balance: row.try_get("balance")?,
            status,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_has_defaults() {
        let account = Account::new("John Doe".into(), "€".into(), "Spain".into());
        assert_eq!(account.id, 0);
        assert_eq!(account.balance, 0.0);
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.name, "John Doe");
        assert_eq!(account.currency, "€");
        assert_eq!(account.country, "Spain");
    }

    #[test]
    fn account_number_is_twenty_digits() {
        let number = generate_account_number();
        assert_eq!(number.len(), ACCOUNT_NUMBER_LEN);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn account_numbers_are_distinct() {
        let a = generate_account_number();
        let b = generate_account_number();
        assert_ne!(a, b);
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            AccountStatus::Active,
            AccountStatus::Frozen,
            AccountStatus::Closed,
        ] {
            assert_eq!(status.to_string().parse::<AccountStatus>().unwrap(), status);
        }
        assert!("dormant".parse::<AccountStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccountStatus::Active).unwrap(),
            "\"active\""
        );
    }

    #[test]
    fn create_body_defaults_missing_fields_to_empty() {
        let body: CreateAccount = serde_json::from_str(r#"{"name": "John Doe"}"#).unwrap();
        assert_eq!(body.name, "John Doe");
        assert!(body.currency.is_empty());
        assert!(body.country.is_empty());
    }
}
