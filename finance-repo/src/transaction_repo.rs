use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::HealthCheck;

pub const DEFAULT_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[async_trait]
pub trait TransactionRepo: HealthCheck {
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Returns transactions in insertion order, skipping `page_options.offset`
    /// records and returning at most `page_options.limit`.
    async fn get_all_transactions(
        &self,
        page_options: PageOptions,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Overwrites every field of the stored transaction.
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Removes the transaction and returns it as it was before removal.
    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub is_income: bool,
}

impl Transaction {
    pub const fn new(
        id: i64,
        description: String,
        amount: f64,
        category: String,
        date: String,
        is_income: bool,
    ) -> Transaction {
        Transaction {
            id,
            description,
            amount,
            category,
            date,
            is_income,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub is_income: bool,
}

impl NewTransaction {
    pub const fn new(
        description: String,
        amount: f64,
        category: String,
        date: String,
        is_income: bool,
    ) -> NewTransaction {
        NewTransaction {
            description,
            amount,
            category,
            date,
            is_income,
        }
    }

    pub fn to_transaction(self, id: i64) -> Transaction {
        Transaction::new(
            id,
            self.description,
            self.amount,
            self.category,
            self.date,
            self.is_income,
        )
    }
}
