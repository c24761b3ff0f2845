//! Variable namespaces for placeholder substitution
//!
//! Two tables feed substitution: a built-in table seeded once at
//! construction with host facts, and a user-defined table the caller may
//! replace or extend at any time. Built-in entries always shadow
//! user-defined entries of the same name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Product identifier exposed as the `best_framework` variable.
pub const PRODUCT_NAME: &str = "VARCONF";

/// A named set of substitution variables.
///
/// Values are arbitrary JSON scalars in practice; maps and lists are
/// accepted here but fail at substitution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableTable {
    entries: HashMap<String, Value>,
}

impl VariableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in variables describing the hosting library and platform.
    ///
    /// Seeds:
    /// - `best_framework`: fixed product identifier
    /// - `version`, `version_major`, `version_minor`, `version_patch`:
    ///   the library's own version, full and per component
    /// - `target_arch`: compiled target architecture
    /// - `system_os`: host operating system name
    /// - `system_os_family`: only on targets that report a family
    pub fn host() -> Self {
        let mut table = Self::new();
        table.set("best_framework", PRODUCT_NAME);
        table.set("version", env!("CARGO_PKG_VERSION"));
        table.set(
            "version_major",
            version_component(env!("CARGO_PKG_VERSION_MAJOR")),
        );
        table.set(
            "version_minor",
            version_component(env!("CARGO_PKG_VERSION_MINOR")),
        );
        table.set(
            "version_patch",
            version_component(env!("CARGO_PKG_VERSION_PATCH")),
        );
        table.set("target_arch", std::env::consts::ARCH);
        table.set("system_os", std::env::consts::OS);
        // wasm and some embedded targets leave the family empty
        if !std::env::consts::FAMILY.is_empty() {
            table.set("system_os_family", std::env::consts::FAMILY);
        }
        table
    }

    /// Insert or overwrite one entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, Value>> for VariableTable {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.set(name, value);
        }
        table
    }
}

/// Default-table-first lookup shared by [`Config::variable`] and the
/// substitution engine.
///
/// [`Config::variable`]: crate::Config::variable
pub(crate) fn lookup<'t>(
    defaults: &'t VariableTable,
    user: &'t VariableTable,
    name: &str,
) -> Option<&'t Value> {
    defaults.get(name).or_else(|| user.get(name))
}

/// Version components are numeric in any valid manifest; fall back to the
/// raw text rather than panicking at construction.
fn version_component(raw: &str) -> Value {
    raw.parse::<u64>().map_or_else(|_| Value::from(raw), Value::from)
}
