pub mod bulk_definitions_filesystem;
pub mod process_env;
pub mod properties_filesystem;

pub use bulk_definitions_filesystem::load_bulk_definitions;
pub use process_env::ProcessEnv;
pub use properties_filesystem::FilesystemPropertiesStore;
