use crate::ports::{EnvLookup, PropertiesStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: EnvLookup, S: PropertiesStore> {
    env: E,
    store: S,
}

impl<E: EnvLookup, S: PropertiesStore> AppContext<E, S> {
    /// Create a new application context.
    pub fn new(env: E, store: S) -> Self {
        Self { env, store }
    }

    /// Get a reference to the environment lookup.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the properties store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
