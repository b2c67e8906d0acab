//! Handler errors and Sentry breadcrumbs.
//!
//! Route handlers return [`Result<T>`]; [`AppError`] turns a refused store
//! operation or a malformed request into a plain-text response with the
//! matching status. Every rejection is logged at `warn`, which the Sentry
//! tracing layer forwards as an event.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use brightcart_core::{PriceError, ProductId};
use thiserror::Error;

use crate::store::StoreError;

/// Error returned by storefront route handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// A store mutator refused the request.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No resource at this path.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was well-formed JSON but not acceptable.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A cart line could not be priced for the response.
    #[error("cart could not be priced: {0}")]
    Price(#[from] PriceError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::UnknownProduct(_) | StoreError::NotInCart(_))
            | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::InvalidQuantity(_) | StoreError::TotalOutOfRange(_))
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Price(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

/// Result type for route handlers.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a shopper action on a product as a Sentry breadcrumb, so an error
/// report shows what happened to the cart just before it.
pub fn product_breadcrumb(category: &'static str, message: &'static str, id: &ProductId) {
    let mut breadcrumb = sentry::Breadcrumb {
        ty: "user".into(),
        category: Some(category.into()),
        message: Some(message.into()),
        level: sentry::Level::Info,
        ..Default::default()
    };
    breadcrumb
        .data
        .insert("product_id".into(), id.as_str().into());

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use brightcart_core::QuantityError;

    use super::*;

    fn status_of(err: impl Into<AppError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_store_errors_keep_their_message() {
        let err = AppError::from(StoreError::NotInCart(ProductId::new("a")));
        assert_eq!(err.to_string(), "product not in cart: a");

        let err = AppError::NotFound("product ghost".to_string());
        assert_eq!(err.to_string(), "not found: product ghost");
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        assert_eq!(
            status_of(StoreError::UnknownProduct(ProductId::new("z"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StoreError::NotInCart(ProductId::new("z"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::NotFound("z".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_bad_input_is_bad_request() {
        assert_eq!(
            status_of(StoreError::InvalidQuantity(QuantityError::NotPositive(0))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::BadRequest("blank id".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(StoreError::TotalOutOfRange(ProductId::new("z"))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unpriceable_cart_is_server_error() {
        assert_eq!(status_of(PriceError::Overflow), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_breadcrumb_without_client_is_noop() {
        product_breadcrumb("cart", "Added to cart", &ProductId::new("echo-dot-4"));
    }
}
