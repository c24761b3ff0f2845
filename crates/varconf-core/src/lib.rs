//! Key-path configuration access with placeholder substitution
//!
//! `varconf-core` resolves dot-separated key paths against an untyped value
//! tree and substitutes `%name%` placeholders inside every string value it
//! returns. Placeholders draw from built-in variables, user-defined
//! variables, and other configuration keys, in that order; substituted
//! values may themselves introduce placeholders, which are expanded in
//! bounded re-scan passes.
//!
//! The tree is produced by a loader crate such as `varconf-json`; this
//! crate performs no I/O.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use varconf_core::Config;
//!
//! let mut config = Config::new(json!({
//!     "var1": {"var1-1": "value1-1"},
//!     "var2": "~~%var1.var1-1%~~+value2",
//!     "motd": "running on %system_os% (%env%)",
//! }));
//! config.set_variable("env", "prod");
//!
//! assert_eq!(config.get("var2").unwrap(), json!("~~value1-1~~+value2"));
//! assert!(config.get("motd").unwrap().as_str().unwrap().ends_with("(prod)"));
//! ```

pub mod config;
pub mod error;
pub mod path;
mod substitute;
pub mod vars;

pub use config::{Config, ConfigAware};
pub use error::{Error, Result};
pub use path::{KeyPath, traverse};
pub use substitute::DEFAULT_MAX_DEPTH;
pub use vars::{PRODUCT_NAME, VariableTable};
