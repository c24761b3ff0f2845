//! The configuration resolver
//!
//! [`Config`] owns a value tree produced by a loader and answers
//! dotted-path queries over it, substituting `%name%` placeholders in every
//! string it hands back.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::path::{KeyPath, traverse};
use crate::substitute::{DEFAULT_MAX_DEPTH, Substituter};
use crate::vars::{self, VariableTable};

/// Resolver over an immutable configuration tree.
///
/// Holds the tree plus two variable namespaces: built-in defaults fixed at
/// construction and user-defined entries that may change over time. Reads
/// take `&self` and the variable writers take `&mut self`, so shared use
/// across threads is read-only by construction; there is no interior
/// mutability.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use varconf_core::Config;
///
/// let config = Config::new(json!({
///     "app": {"name": "demo"},
///     "banner": "%app.name% powered by %best_framework%",
/// }));
///
/// assert!(config.has("app.name"));
/// assert_eq!(
///     config.get("banner").unwrap(),
///     json!("demo powered by VARCONF"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    root: Value,
    defaults: VariableTable,
    user: VariableTable,
    max_depth: usize,
}

impl Config {
    /// Wrap a loaded tree, seeding the default variables from
    /// [`VariableTable::host`].
    pub fn new(root: Value) -> Self {
        Self::with_defaults(root, VariableTable::host())
    }

    /// Wrap a loaded tree with an explicit default-variable table.
    ///
    /// The table is fixed for the lifetime of the resolver; tests and
    /// embedding applications use this to control the built-in namespace.
    pub fn with_defaults(root: Value, defaults: VariableTable) -> Self {
        Self {
            root,
            defaults,
            user: VariableTable::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the bound on substitution passes (default
    /// [`DEFAULT_MAX_DEPTH`]).
    ///
    /// [`DEFAULT_MAX_DEPTH`]: crate::DEFAULT_MAX_DEPTH
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Look up a key path and substitute the found value.
    ///
    /// The empty path addresses the whole tree. Returns `Ok(None)` when the
    /// path does not resolve; the caller decides whether that is an error
    /// ([`get`]) or a default ([`get_or`]).
    ///
    /// # Errors
    ///
    /// [`Error::Resolution`] when a found value's placeholders cannot be
    /// fully resolved, reported against `path`.
    ///
    /// [`get`]: Config::get
    /// [`get_or`]: Config::get_or
    pub fn try_get(&self, path: &str) -> Result<Option<Value>> {
        if path.is_empty() {
            return self.substituted(path, &self.root).map(Some);
        }
        match traverse(&self.root, &KeyPath::parse(path)) {
            Some(found) => self.substituted(path, found).map(Some),
            None => Ok(None),
        }
    }

    /// Get the substituted value at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the path does not resolve;
    /// [`Error::Resolution`] when substitution of a found value fails.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use varconf_core::Config;
    ///
    /// let config = Config::new(json!({"var1": {"var1-1": "value1-1"}}));
    /// assert_eq!(config.get("var1.var1-1").unwrap(), json!("value1-1"));
    /// assert!(config.get("var100").is_err());
    /// ```
    pub fn get(&self, path: &str) -> Result<Value> {
        self.try_get(path)?.ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })
    }

    /// Get the substituted value at `path`, or `default` when the path does
    /// not resolve.
    ///
    /// The default is returned verbatim, not run through substitution.
    /// Substitution failures on a *found* value are never masked by the
    /// default.
    pub fn get_or(&self, path: &str, default: Value) -> Result<Value> {
        Ok(self.try_get(path)?.unwrap_or(default))
    }

    /// Whether `path` resolves to a value, `null` included.
    ///
    /// Pure structural check: never substitutes and never fails. The empty
    /// path is the root, which always exists.
    pub fn has(&self, path: &str) -> bool {
        if path.is_empty() {
            return true;
        }
        traverse(&self.root, &KeyPath::parse(path)).is_some()
    }

    /// Replace the user-defined variable table wholesale.
    pub fn set_variables(&mut self, variables: VariableTable) {
        self.user = variables;
    }

    /// Insert or overwrite one user-defined variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.user.set(name, value);
    }

    /// Look up a variable: default table first, then user-defined entries.
    ///
    /// Substitution consults the same tables in the same order, so a
    /// default variable always shadows a user-defined one of the same
    /// name.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        vars::lookup(&self.defaults, &self.user, name)
    }

    /// Clone `value` and run substitution over it, reporting failures
    /// against the path the caller asked for.
    fn substituted(&self, path: &str, value: &Value) -> Result<Value> {
        let mut resolved = value.clone();
        Substituter::new(&self.root, &self.defaults, &self.user, self.max_depth)
            .apply(&mut resolved)
            .map_err(|source| source.at_path(path))?;
        Ok(resolved)
    }
}

/// Access to a carried [`Config`] for objects that hold one.
pub trait ConfigAware {
    /// The carried configuration, if any.
    fn config(&self) -> Option<&Config>;

    /// Attach a configuration.
    fn set_config(&mut self, config: Config);

    /// Whether a configuration is attached.
    fn has_config(&self) -> bool {
        self.config().is_some()
    }
}
