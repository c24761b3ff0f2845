//! Placeholder substitution over retrieved configuration values
//!
//! String values may embed `%name%` placeholders. Each pass resolves every
//! placeholder found in the current text, then the result is re-scanned; a
//! value spliced in during one pass may introduce placeholders for the
//! next. Passes are bounded so reference cycles surface as an error instead
//! of exhausting the stack.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::path::{KeyPath, traverse};
use crate::vars::{self, VariableTable};

/// Default bound on substitution passes per string.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Backstop on the working text size per string, in bytes.
///
/// A cycle whose values multiply their placeholders doubles the text each
/// pass and can exhaust memory before the pass bound trips.
const MAX_TEXT_BYTES: usize = 1 << 20;

/// Pattern for one placeholder: `%` brackets around a name made of word
/// characters, hyphens, dots, commas, and whitespace.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%([\w\-.,\s]+)%").unwrap());

/// One substitution run over values retrieved from `tree`.
pub(crate) struct Substituter<'a> {
    tree: &'a Value,
    defaults: &'a VariableTable,
    user: &'a VariableTable,
    max_passes: usize,
}

impl<'a> Substituter<'a> {
    pub(crate) fn new(
        tree: &'a Value,
        defaults: &'a VariableTable,
        user: &'a VariableTable,
        max_passes: usize,
    ) -> Self {
        Self {
            tree,
            defaults,
            user,
            max_passes,
        }
    }

    /// Rewrite every string nested anywhere inside `value`, in place.
    ///
    /// Container shape, map keys, and non-string scalars are untouched.
    pub(crate) fn apply(&self, value: &mut Value) -> Result<()> {
        match value {
            Value::String(text) => {
                if let Some(rewritten) = self.rewrite(text)? {
                    *text = rewritten;
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.apply(item)?;
                }
            }
            Value::Object(map) => {
                for item in map.values_mut() {
                    self.apply(item)?;
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
        Ok(())
    }

    /// Run passes over one string until it is placeholder-free.
    ///
    /// Returns `None` when the input needed no rewriting at all.
    fn rewrite(&self, text: &str) -> Result<Option<String>> {
        if !PLACEHOLDER.is_match(text) {
            return Ok(None);
        }

        let mut current = text.to_string();
        let mut passes = 0;
        while PLACEHOLDER.is_match(&current) {
            if passes == self.max_passes {
                return Err(Error::DepthExceeded {
                    limit: self.max_passes,
                });
            }
            current = self.pass(&current)?;
            if current.len() > MAX_TEXT_BYTES {
                return Err(Error::SizeExceeded {
                    limit: MAX_TEXT_BYTES,
                });
            }
            passes += 1;
        }
        tracing::trace!(passes, "substitution reached a fixed point");
        Ok(Some(current))
    }

    /// Resolve every placeholder present in `text` once, left to right.
    fn pass(&self, text: &str) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;
        for captures in PLACEHOLDER.captures_iter(text) {
            let token = captures.get(0).unwrap();
            let replacement = self.resolve(&captures[1])?;
            output.push_str(&text[cursor..token.start()]);
            output.push_str(&replacement);
            cursor = token.end();
        }
        output.push_str(&text[cursor..]);
        Ok(output)
    }

    /// Resolve one placeholder name.
    ///
    /// Lookup order: default variables, user-defined variables, then the
    /// name read as a key path into the tree. Key-path hits splice their
    /// raw stored text; later passes expand anything nested inside it.
    fn resolve(&self, name: &str) -> Result<String> {
        if let Some(value) = vars::lookup(self.defaults, self.user, name) {
            return render(name, value);
        }
        match traverse(self.tree, &KeyPath::parse(name)) {
            Some(value) => render(name, value),
            None => Err(Error::UnknownPlaceholder {
                name: name.to_string(),
            }),
        }
    }
}

/// Convert a resolved value into splice text.
///
/// A found null splices as empty text; maps and lists have no string form.
fn render(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::NonScalar {
            name: name.to_string(),
        }),
    }
}
