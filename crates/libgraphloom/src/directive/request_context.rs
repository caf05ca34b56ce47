use async_graphql::Value;
use std::sync::Arc;

/// Immutable key/value context threaded through directive chains.
///
/// Extending a context with [`RequestContext::with_value`] returns a new
/// context that shares every existing entry with the one it was derived
/// from; the original is never modified. Later entries shadow earlier ones
/// with the same key.
#[derive(Clone, Default)]
pub struct RequestContext {
    head: Option<Arc<ContextEntry>>,
}

struct ContextEntry {
    key: String,
    value: Value,
    parent: Option<Arc<ContextEntry>>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(&self, key: impl Into<String>, value: Value) -> Self {
        Self {
            head: Some(Arc::new(ContextEntry {
                key: key.into(),
                value,
                parent: self.head.clone(),
            })),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut entry = self.head.as_deref();
        while let Some(current) = entry {
            if current.key == key {
                return Some(&current.value);
            }
            entry = current.parent.as_deref();
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Visible entries, most recently added first. Shadowed entries are
    /// skipped.
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        let mut seen = Vec::<&str>::new();
        let mut entries = vec![];
        let mut entry = self.head.as_deref();
        while let Some(current) = entry {
            if !seen.contains(&current.key.as_str()) {
                seen.push(current.key.as_str());
                entries.push((current.key.as_str(), &current.value));
            }
            entry = current.parent.as_deref();
        }
        entries
    }
}
impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries())
            .finish()
    }
}
impl<K: Into<String>> FromIterator<(K, Value)> for RequestContext {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |ctx, (key, value)| ctx.with_value(key, value))
    }
}
