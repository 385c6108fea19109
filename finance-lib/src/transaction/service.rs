use crate::transaction::models::{ListQuery, TransactionRequest, TransactionResponse};
use finance_repo::transaction_repo::{TransactionRepo, TransactionRepoError};
use finance_repo::HealthCheck;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Maps between the wire types and the store. The store is injected at
/// construction; every operation is a single store call.
pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepo>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepo>) -> TransactionService {
        TransactionService { transaction_repo }
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, TransactionRepoError> {
        let transaction = self
            .transaction_repo
            .create_new_transaction(request.into())
            .await?;
        debug!(transaction_id = transaction.id, "Created transaction");
        Ok(transaction.into())
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: ListQuery,
    ) -> Result<Vec<TransactionResponse>, TransactionRepoError> {
        let transactions = self
            .transaction_repo
            .get_all_transactions(query.into())
            .await?;
        Ok(transactions.into_iter().map(|t| t.into()).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        transaction_id: i64,
    ) -> Result<TransactionResponse, TransactionRepoError> {
        let transaction = self.transaction_repo.get_transaction(transaction_id).await?;
        Ok(transaction.into())
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        transaction_id: i64,
        request: TransactionRequest,
    ) -> Result<TransactionResponse, TransactionRepoError> {
        let transaction = self
            .transaction_repo
            .update_transaction(transaction_id, request.into())
            .await?;
        Ok(transaction.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        transaction_id: i64,
    ) -> Result<TransactionResponse, TransactionRepoError> {
        let transaction = self
            .transaction_repo
            .delete_transaction(transaction_id)
            .await?;
        debug!(transaction_id, "Deleted transaction");
        Ok(transaction.into())
    }

    pub async fn health_check(&self) -> bool {
        self.transaction_repo.check().await
    }
}
