use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, PageOptions, Transaction, TransactionRepo, TransactionRepoError,
};
use crate::HealthCheck;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    transactions: BTreeMap<i64, Transaction>,
    next_id: i64,
}

pub struct MemTransactionRepo {
    state: RwLock<State>,
}

impl MemTransactionRepo {
    pub fn new() -> MemTransactionRepo {
        let state = State {
            transactions: BTreeMap::new(),
            next_id: 1,
        };
        MemTransactionRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemTransactionRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthCheck for MemTransactionRepo {
    async fn check(&self) -> bool {
        self.read_lock().is_ok()
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .transactions
            .get(&transaction_id)
            .cloned()
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn get_all_transactions(
        &self,
        page_options: PageOptions,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        // BTreeMap iterates in id order, which is insertion order
        let transactions = read_guard
            .transactions
            .values()
            .skip(page_options.offset.max(0) as usize)
            .take(page_options.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(transactions)
    }

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let transaction = new_transaction.to_transaction(id);
        write_guard.transactions.insert(id, transaction.clone());

        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        if let Entry::Occupied(mut e) = write_guard.transactions.entry(transaction_id) {
            let transaction = updated_transaction.to_transaction(transaction_id);
            e.insert(transaction.clone());
            Ok(transaction)
        } else {
            Err(TransactionNotFound(transaction_id))
        }
    }

    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .transactions
            .remove(&transaction_id)
            .ok_or(TransactionNotFound(transaction_id))
    }
}
