mod env_lookup;
mod properties_store;

pub use env_lookup::EnvLookup;
pub use properties_store::PropertiesStore;
