use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Client-facing message strings of the product wire contract.
///
/// These are pinned verbatim: existing clients match on them.
pub mod messages {
    pub const SERVER_ERROR: &str = "Server Error";
    pub const PRODUCT_NOT_FOUND: &str = "Product not found";
    pub const INVALID_PRODUCT_ID: &str = "Invalid product id";
    pub const MISSING_FIELDS: &str = "Provide all mandate fields";
    pub const PRODUCT_DELETED: &str = "Product Deleted";
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product not found")]
    NotFound,

    #[error("invalid product id '{0}'")]
    InvalidId(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for envelope error responses.
///
/// Store errors keep their detail in the server log only; the caller gets
/// the generic message.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound(messages::PRODUCT_NOT_FOUND.to_string()),
            ProductError::InvalidId(id) => {
                tracing::info!(id = %id, "Rejected malformed product id");
                AppError::BadRequest(messages::INVALID_PRODUCT_ID.to_string())
            }
            ProductError::Validation(detail) => {
                tracing::info!(detail = %detail, "Rejected product payload");
                AppError::BadRequest(messages::MISSING_FIELDS.to_string())
            }
            ProductError::Database(detail) => {
                tracing::error!(error = %detail, "Product store error");
                AppError::InternalServerError(messages::SERVER_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
