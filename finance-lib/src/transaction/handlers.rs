use crate::error::HandlerError;
use crate::transaction::models::{ListQuery, TransactionRequest};
use crate::transaction::service::TransactionService;
use actix_web::{web, HttpResponse, Responder};
use tracing::Span;

fn record_transaction_id(transaction_id: i64) {
    Span::current().record("transaction_id", transaction_id);
}

#[post("")]
pub async fn create_new_transaction(
    transaction_service: web::Data<TransactionService>,
    new_transaction: web::Json<TransactionRequest>,
) -> Result<impl Responder, HandlerError> {
    let transaction = transaction_service
        .create(new_transaction.into_inner())
        .await?;
    record_transaction_id(transaction.id);
    Ok(HttpResponse::Ok().json(transaction))
}

#[get("")]
pub async fn get_all_transactions(
    transaction_service: web::Data<TransactionService>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[get("/{transaction_id}")]
pub async fn get_transaction(
    transaction_service: web::Data<TransactionService>,
    transaction_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    record_transaction_id(transaction_id);

    let transaction = transaction_service.get(transaction_id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[put("/{transaction_id}")]
pub async fn update_transaction(
    transaction_service: web::Data<TransactionService>,
    transaction_id: web::Path<i64>,
    updated_transaction: web::Json<TransactionRequest>,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    record_transaction_id(transaction_id);

    let transaction = transaction_service
        .update(transaction_id, updated_transaction.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[delete("/{transaction_id}")]
pub async fn delete_transaction(
    transaction_service: web::Data<TransactionService>,
    transaction_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let transaction_id = transaction_id.into_inner();
    record_transaction_id(transaction_id);

    let transaction = transaction_service.delete(transaction_id).await?;
    Ok(HttpResponse::Ok().json(transaction))
}
