
pub use fake_env::FakeEnv;
pub use memory_properties_store::MemoryPropertiesStore;
