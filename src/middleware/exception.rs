//! Outermost fault boundary.
//!
//! A panic raised by any inner middleware or handler is logged and answered
//! with a fixed 500 body; the panic payload never reaches the client.

use std::any::Any;

use axum::{http::StatusCode, response::Response};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::utils::errors::{GENERIC_ERROR_MESSAGE, error_response};

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

pub fn exception_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    }
}

pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    error!(panic = %panic_message(panic.as_ref()), "An unexpected error occurred");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
}
