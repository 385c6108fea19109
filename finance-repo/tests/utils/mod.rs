pub mod generator;

use finance_repo::transaction_repo::TransactionRepo;
use std::sync::Arc;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repo(repo_type: RepoType) -> Arc<dyn TransactionRepo> {
    match repo_type {
        // a single connection keeps the in-memory database alive and shared
        RepoType::SQLx => finance_repo::sqlx_repo::create_repo("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => finance_repo::mem_repo::create_repo(),
    }
}
