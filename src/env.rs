use std::collections::HashMap;
use std::env as stdenv;

/// Read-only view of the variables a command line can see.
///
/// Lookups go to the live process environment every time, so a value that
/// changes between two commands is picked up by the second one. An overlay of
/// variables can be layered on top; it shadows the process environment and is
/// the only thing an isolated view consults.
///
/// Launched programs get the same view: the overlay on top of the process
/// environment, or only the overlay when isolated. The interpreter never
/// writes to the process environment.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Variables that shadow the process environment.
    pub vars: HashMap<String, String>,
    /// Whether lookups fall through to the process environment.
    inherit: bool,
}

impl Environment {
    /// A view of the process environment with no overlay.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            inherit: true,
        }
    }

    /// A view that only sees `vars`, ignoring the process environment.
    pub fn isolated<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            inherit: false,
        }
    }

    /// Get the value of a variable.
    ///
    /// Looks up the key in `self.vars` first, falling back to `std::env::var`
    /// unless the view is isolated. Empty names are never set.
    pub fn get_var(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        self.vars
            .get(key)
            .cloned()
            .or_else(|| self.inherit.then(|| stdenv::var(key).ok()).flatten())
    }

    /// Whether variables missing from the overlay come from the process.
    pub fn inherits(&self) -> bool {
        self.inherit
    }

    /// Set or override a variable in the overlay.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }
}
