//! TOML configuration for the demo binary.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_DEBOUNCE_MS};
pub use types::{Config, DirectoryConfig, PickerConfig, SearchConfig};
