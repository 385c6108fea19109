use actix_web::web::Data;
use finance_lib::transaction::TransactionService;
use rstest::*;
use tracing::info;
use tracing::Level;

#[allow(unused_macros)]
macro_rules! build_app {
    ($transaction_service:expr) => {{
        let app = App::new()
            .wrap(finance_lib::cors::create_cors(&[
                "http://localhost:3000".to_string()
            ]))
            .wrap(actix_web::middleware::NormalizePath::trim())
            .wrap(finance_lib::telemetry::create_middleware())
            .configure(finance_lib::app_config_func($transaction_service));
        tracing::info!("Built app");
        app
    }};
}

#[allow(unused_macros)]
macro_rules! create_transaction {
    (&$service:ident, $new_transaction:expr) => {{
        let request = TestRequest::post()
            .uri("/transactions/")
            .set_json(&$new_transaction)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert!(
            response.status().is_success(),
            "Got {} response when creating transaction",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum RepoType {
    SQLx,
    Mem,
}

#[allow(dead_code)]
pub async fn build_transaction_service(repo_type: RepoType) -> Data<TransactionService> {
    let transaction_repo = match repo_type {
        // a single connection keeps the in-memory database alive and shared
        RepoType::SQLx => finance_repo::sqlx_repo::create_repo("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => finance_repo::mem_repo::create_repo(),
    };
    Data::new(TransactionService::new(transaction_repo))
}

#[fixture]
pub fn transaction_service() -> Data<TransactionService> {
    Data::new(TransactionService::new(
        finance_repo::mem_repo::create_repo(),
    ))
}
