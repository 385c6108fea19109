#[macro_use]
extern crate actix_web;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use std::fmt::{Debug, Display};

use crate::transaction::TransactionService;

pub mod config;
pub mod cors;
mod error;
pub mod health;
pub mod telemetry;
pub mod transaction;

/// Registers every route together with the shared service and extractor
/// configs. Request bodies, path ids and query values that fail to
/// deserialize are answered with 422 before any handler runs.
pub fn app_config_func(
    transaction_service: web::Data<TransactionService>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(transaction_service)
            .app_data(
                // bodies are parsed as JSON whatever their content type
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(|err, req| match err {
                        JsonPayloadError::Deserialize(deserialize_err) => {
                            unprocessable_entity(
                                "Unable to parse JSON payload",
                                deserialize_err,
                                req,
                            )
                        }
                        _ => {
                            tracing::error!(req_path = req.path(), %err);
                            err.into()
                        }
                    }),
            )
            .app_data(web::PathConfig::default().error_handler(|err, req| {
                unprocessable_entity("Unable to parse path parameter", err, req)
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, req| {
                unprocessable_entity("Unable to parse query parameters", err, req)
            }))
            .service(health::health_check)
            .service(transaction::transaction_service());
    }
}

fn unprocessable_entity<E>(message: &str, err: E, req: &HttpRequest) -> actix_web::Error
where
    E: Debug + Display + 'static,
{
    tracing::error!(req_path = req.path(), %err);
    let error_body = serde_json::json!({
        "error": message,
        "detail": err.to_string(),
    });
    InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(error_body)).into()
}
