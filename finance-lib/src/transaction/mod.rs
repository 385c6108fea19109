use actix_web::{web, Scope};

pub mod handlers;
pub mod models;
pub mod service;

pub use models::{ListQuery, TransactionRequest, TransactionResponse};
pub use service::TransactionService;

pub fn transaction_service() -> Scope {
    web::scope("/transactions")
        .service(handlers::create_new_transaction)
        .service(handlers::get_all_transactions)
        .service(handlers::get_transaction)
        .service(handlers::update_transaction)
        .service(handlers::delete_transaction)
}
