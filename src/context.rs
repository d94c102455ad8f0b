//! Request-scoped state: incoming request properties and the execution context.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
};

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// Namespace under which saved keys are exported for display components.
pub const SAVED_KEYS_NAMESPACE: &str = "translationApplication";

/// Properties of an incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    properties: HashMap<String, String>,
}

impl Request {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query string such as `?showKeys&lang=fr`.
    ///
    /// Valueless parameters are kept with an empty value. Later duplicates win.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let properties = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (!name.is_empty()).then(|| (name.to_string(), value.to_string()))
            })
            .collect();
        Self { properties }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

/// Translation key → rendered plain text, collected while rendering one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedKeys(BTreeMap<String, String>);

impl SavedKeys {
    /// Stores `text` for `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.0.insert(key.into(), text.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, text)| (key.as_str(), text.as_str()))
    }
}

/// Per-request execution context.
///
/// Cloning yields another handle to the same context, so the renderer that fills it and
/// the component that displays it share one set of saved keys.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    /// Created on first save.
    saved_keys: Arc<Mutex<Option<SavedKeys>>>,
}

impl ExecutionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the saved keys, `None` if nothing was saved in this context yet.
    #[must_use]
    pub fn saved_keys(&self) -> Option<SavedKeys> {
        self.lock().clone()
    }

    /// Runs `f` on the saved keys, creating the registry first if needed.
    pub fn with_saved_keys<R>(&self, f: impl FnOnce(&mut SavedKeys) -> R) -> R {
        let mut guard = self.lock();
        f(guard.get_or_insert_with(SavedKeys::default))
    }

    /// Exports the context's data as JSON, saved keys under [`SAVED_KEYS_NAMESPACE`].
    #[must_use]
    pub fn export(&self) -> Value {
        let mut data = serde_json::Map::new();
        if let Some(saved_keys) = self.saved_keys() {
            let entries = saved_keys
                .iter()
                .map(|(key, text)| (key.to_string(), Value::String(text.to_string())))
                .collect();
            data.insert(SAVED_KEYS_NAMESPACE.to_string(), Value::Object(entries));
        }
        Value::Object(data)
    }

    /// Poisoning only means another holder panicked mid-insert; the map is still consistent.
    fn lock(&self) -> MutexGuard<'_, Option<SavedKeys>> {
        self.saved_keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// What a lookup knows about the request it runs in.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    request: Request,
    execution_context: Option<ExecutionContext>,
}

impl RequestScope {
    /// Scope with a request but no execution context.
    #[must_use]
    pub const fn new(request: Request) -> Self {
        Self { request, execution_context: None }
    }

    #[must_use]
    pub fn with_execution_context(mut self, execution_context: ExecutionContext) -> Self {
        self.execution_context = Some(execution_context);
        self
    }

    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    #[must_use]
    pub const fn execution_context(&self) -> Option<&ExecutionContext> {
        self.execution_context.as_ref()
    }
}
