//! Cross-cutting request processing.
//!
//! Every request passes through the same chain, outermost first:
//!
//! 1. [`exception`]: turns a panic anywhere below into a generic 500
//! 2. CORS
//! 3. [`auth`]: rejects requests without a non-blank `Authorization` header,
//!    except on documentation paths
//! 4. [`crate::logging::logging_middleware`]: logs the request and its status
//!
//! [`pipeline::apply_pipeline`] is the only place the order is defined.

pub mod auth;
pub mod exception;
pub mod pipeline;
