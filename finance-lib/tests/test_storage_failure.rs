extern crate rstest;
extern crate serde_json;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use actix_web::web::Data;
use actix_web::App;
use anyhow::anyhow;
use async_trait::async_trait;
use finance_lib::transaction::{TransactionRequest, TransactionService};
use finance_repo::transaction_repo::{
    NewTransaction, PageOptions, Transaction, TransactionRepo, TransactionRepoError,
};
use finance_repo::HealthCheck;
use rstest::rstest;
use utils::tracing_setup;

#[macro_use]
mod utils;

/// A store whose backing database is unreachable.
struct UnreachableRepo;

#[async_trait]
impl HealthCheck for UnreachableRepo {
    async fn check(&self) -> bool {
        false
    }
}

#[async_trait]
impl TransactionRepo for UnreachableRepo {
    async fn get_transaction(
        &self,
        _transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn get_all_transactions(
        &self,
        _page_options: PageOptions,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn create_new_transaction(
        &self,
        _new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn update_transaction(
        &self,
        _transaction_id: i64,
        _updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn delete_transaction(
        &self,
        _transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(anyhow!("connection refused").into())
    }
}

fn unreachable_service() -> Data<TransactionService> {
    Data::new(TransactionService::new(Arc::new(UnreachableRepo)))
}

#[rstest]
#[actix_rt::test]
async fn test_storage_failure_is_internal_error(_tracing_setup: &()) {
    let service = test::init_service(build_app!(unreachable_service())).await;

    let request = TestRequest::post()
        .uri("/transactions/")
        .set_json(TransactionRequest::new("Coffee", 4.5, "Food", "2024-01-01", false))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error_body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(error_body["error"], "Internal server error");
    assert!(error_body.get("detail").is_none());

    let request = TestRequest::get().uri("/transactions/1").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[actix_rt::test]
async fn test_health_check_unavailable(_tracing_setup: &()) {
    let service = test::init_service(build_app!(unreachable_service())).await;

    let request = TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
