use crate::transaction::TransactionService;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

#[get("/health")]
pub async fn health_check(transaction_service: web::Data<TransactionService>) -> impl Responder {
    if transaction_service.health_check().await {
        HttpResponse::Ok().json(HealthStatus {
            status: "ok".to_string(),
        })
    } else {
        warn!("Store failed health check");
        HttpResponse::ServiceUnavailable().json(HealthStatus {
            status: "unavailable".to_string(),
        })
    }
}
