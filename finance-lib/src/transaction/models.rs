use finance_repo::transaction_repo::{NewTransaction, PageOptions, Transaction, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};

/// Request body for creating or replacing a transaction.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TransactionRequest {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub is_income: bool,
}

impl TransactionRequest {
    pub fn new(
        description: &str,
        amount: f64,
        category: &str,
        date: &str,
        is_income: bool,
    ) -> TransactionRequest {
        TransactionRequest {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
            is_income,
        }
    }
}

impl From<TransactionRequest> for NewTransaction {
    fn from(request: TransactionRequest) -> Self {
        NewTransaction {
            description: request.description,
            amount: request.amount,
            category: request.category,
            date: request.date,
            is_income: request.is_income,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TransactionResponse {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub is_income: bool,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        TransactionResponse {
            id: transaction.id,
            description: transaction.description,
            amount: transaction.amount,
            category: transaction.category,
            date: transaction.date,
            is_income: transaction.is_income,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ListQuery> for PageOptions {
    fn from(query: ListQuery) -> Self {
        PageOptions {
            offset: query.skip.map_or(0, i64::from),
            limit: query.limit.map_or(DEFAULT_LIMIT, i64::from),
        }
    }
}
