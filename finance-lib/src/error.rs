use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use finance_repo::transaction_repo::TransactionRepoError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    TransactionRepo(#[from] TransactionRepoError),
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::TransactionRepo(TransactionRepoError::TransactionNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::TransactionRepo(TransactionRepoError::Other(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = match self {
            HandlerError::TransactionRepo(e @ TransactionRepoError::TransactionNotFound(_)) => {
                serde_json::json!({
                    "error": "Transaction not found",
                    "detail": e.to_string(),
                })
            }
            HandlerError::TransactionRepo(TransactionRepoError::Other(e)) => {
                error!(error = ?e, "Storage failure");
                serde_json::json!({
                    "error": "Internal server error",
                })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
