use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, PageOptions, Transaction, TransactionRepo, TransactionRepoError,
};
use crate::HealthCheck;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{query, query_as, query_scalar, Sqlite, SqlitePool};
use tracing::{error, instrument};

const TRANSACTION_COLUMNS: &str = "id, description, amount, category, date, is_income";

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    description: String,
    amount: Option<f64>,
    category: String,
    date: String,
    is_income: bool,
}

impl From<TransactionEntry> for Transaction {
    fn from(value: TransactionEntry) -> Self {
        Transaction::new(
            value.id,
            value.description,
            value.amount.unwrap_or(f64::NAN),
            value.category,
            value.date,
            value.is_income,
        )
    }
}

pub struct SQLxTransactionRepo {
    pool: SqlitePool,
}

impl SQLxTransactionRepo {
    pub fn new(pool: SqlitePool) -> SQLxTransactionRepo {
        SQLxTransactionRepo { pool }
    }

    /// Checks out a connection for a single operation. It goes back to the pool
    /// when the returned guard is dropped, whichever way the operation ends.
    async fn connection(&self) -> Result<PoolConnection<Sqlite>, TransactionRepoError> {
        let conn = self
            .pool
            .acquire()
            .await
            .context("Unable to acquire database connection")?;
        Ok(conn)
    }
}

#[async_trait]
impl HealthCheck for SQLxTransactionRepo {
    async fn check(&self) -> bool {
        match query::<Sqlite>("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                error!(%e, "Health check query failed");
                false
            }
        }
    }
}

#[async_trait]
impl TransactionRepo for SQLxTransactionRepo {
    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut conn = self.connection().await?;

        let sql = format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS);
        let transaction_entry = query_as::<Sqlite, TransactionEntry>(&sql)
            .bind(transaction_id)
            .fetch_optional(&mut *conn)
            .await
            .with_context(|| format!("Unable to get transaction {}", transaction_id))?;

        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn get_all_transactions(
        &self,
        page_options: PageOptions,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let mut conn = self.connection().await?;

        // SQLite treats a negative LIMIT as unbounded
        let sql = format!(
            "SELECT {} FROM transactions ORDER BY id LIMIT ? OFFSET ?",
            TRANSACTION_COLUMNS
        );
        let transaction_entries = query_as::<Sqlite, TransactionEntry>(&sql)
            .bind(page_options.limit.max(0))
            .bind(page_options.offset.max(0))
            .fetch_all(&mut *conn)
            .await
            .context("Unable to get transactions")?;

        Ok(transaction_entries
            .into_iter()
            .map(|transaction_entry| transaction_entry.into())
            .collect())
    }

    #[instrument(skip(self))]
    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut conn = self.connection().await?;

        let id: i64 = query_scalar::<Sqlite, i64>(
            "INSERT INTO transactions (description, amount, category, date, is_income) VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(new_transaction.description.as_str())
        .bind(new_transaction.amount)
        .bind(new_transaction.category.as_str())
        .bind(new_transaction.date.as_str())
        .bind(new_transaction.is_income)
        .fetch_one(&mut *conn)
        .await
        .context("Unable to insert transaction")?;

        Ok(new_transaction.to_transaction(id))
    }

    #[instrument(skip(self))]
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut conn = self.connection().await?;

        let sql = format!(
            "UPDATE transactions SET description = ?, amount = ?, category = ?, date = ?, is_income = ? WHERE id = ? RETURNING {}",
            TRANSACTION_COLUMNS
        );
        let transaction_entry = query_as::<Sqlite, TransactionEntry>(&sql)
            .bind(updated_transaction.description.as_str())
            .bind(updated_transaction.amount)
            .bind(updated_transaction.category.as_str())
            .bind(updated_transaction.date.as_str())
            .bind(updated_transaction.is_income)
            .bind(transaction_id)
            .fetch_optional(&mut *conn)
            .await
            .with_context(|| format!("Unable to update transaction {}", transaction_id))?;

        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut conn = self.connection().await?;

        let sql = format!(
            "DELETE FROM transactions WHERE id = ? RETURNING {}",
            TRANSACTION_COLUMNS
        );
        let transaction_entry = query_as::<Sqlite, TransactionEntry>(&sql)
            .bind(transaction_id)
            .fetch_optional(&mut *conn)
            .await
            .with_context(|| format!("Unable to delete transaction {}", transaction_id))?;

        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }
}
