//! Layered directory-based configuration loading.
//!
//! This crate discovers config files in a directory, parses each through a
//! format driver, and merges them onto caller defaults with `.local.`
//! override files winning last. The result is an immutable [`Config`] whose
//! lookups never fail: a missing key is `None` (or `Value::Null` when
//! indexing), never a panic.
//!
//! ```no_run
//! use strata::Config;
//!
//! # fn main() -> Result<(), strata::ConfigError> {
//! let config = Config::load("configs")?;
//! if let Some(host) = config.get("db_host") {
//!     println!("db host: {host}");
//! }
//! println!("timeout: {}", config["timeout"]);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod loader;
mod values;

/// Merged configuration facade and its load constructors.
pub use config::Config;
/// Public error type returned by config loading APIs.
pub use error::ConfigError;
/// File drivers, the loader contract, and the override path transform.
pub use loader::{FileLoader, Json5FileLoader, JsonFileLoader, YamlFileLoader, local_override_path};
/// Immutable merged key/value container.
pub use values::ConfigValues;
