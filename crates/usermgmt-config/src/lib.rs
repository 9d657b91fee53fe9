//! # usermgmt-config
//!
//! Configuration types for the user management API.
//!
//! Every type is loaded from environment variables through `from_env()` and
//! has a `Default` matching the values used when a variable is unset:
//!
//! - [`server`]: listen address
//! - [`auth`]: paths exempt from the bearer-token gate
//! - [`users`]: id assignment and update policy
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`logging`]: log level and output format
//!
//! Values that fail to parse fall back to their defaults.
//!
//! # Example
//!
//! ```ignore
//! use usermgmt_config::{AuthConfig, ServerConfig, UsersConfig};
//!
//! let server = ServerConfig::from_env();
//! let auth = AuthConfig::from_env();
//! let users = UsersConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod logging;
pub mod server;
pub mod users;

mod env;

pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use logging::{LogConfig, LogFormat};
pub use server::ServerConfig;
pub use users::UsersConfig;
