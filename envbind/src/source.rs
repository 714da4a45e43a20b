//! Environment stores that bindings read from

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only key/value store queried by exact key.
///
/// An unset key and a key set to the empty string are treated the same by
/// the binder, so implementations may return either `None` or `Some("")`.
pub trait EnvSource {
    /// Look up `key`.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!(key, "ignoring non-unicode environment variable");
                None
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_sources() {
        let mut hash = HashMap::new();
        hash.insert("a.b".to_string(), "1".to_string());
        let tree: BTreeMap<_, _> = hash.clone().into_iter().collect();

        assert_eq!(hash.var("a.b").as_deref(), Some("1"));
        assert_eq!(tree.var("a.b").as_deref(), Some("1"));
        assert_eq!(hash.var("a"), None);
        assert_eq!((&tree).var("missing"), None);
    }

    #[test]
    #[serial]
    fn test_process_env() {
        env::set_var("ENVBIND_SOURCE_TEST", "value");
        assert_eq!(
            ProcessEnv.var("ENVBIND_SOURCE_TEST").as_deref(),
            Some("value")
        );
        env::remove_var("ENVBIND_SOURCE_TEST");
        assert_eq!(ProcessEnv.var("ENVBIND_SOURCE_TEST"), None);
    }
}
