//! # User Management API
//!
//! An in-memory user CRUD service built with Axum.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Exception boundary, bearer gate, pipeline order
//! ├── modules/
//! │   └── users/       # Store, service, controller, router, model
//! ├── utils/           # AppError and JSON error bodies
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # Subscriber setup and request logging
//! ├── router.rs        # Top-level router
//! ├── state.rs         # Shared application state
//! └── validator.rs     # Field rules and the ValidatedJson extractor
//! ```
//!
//! ## Request chain
//!
//! ```text
//! exception handler → CORS → auth gate → logger → handler → store
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/users` | 200 | |
//! | GET | `/users/{id}` | 200 | 404 |
//! | POST | `/users` | 200 | 400 |
//! | PUT | `/users/{id}` | 200 | 400, 404 |
//! | DELETE | `/users/{id}` | 204 | 404 |
//!
//! All of them answer 401 without a non-blank `Authorization` header. The
//! Swagger UI (`/swagger-ui`), the OpenAPI document (`/api-docs`) and Scalar
//! (`/scalar`) are open.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use usermgmt_config;
