//! Configuration source implementations.

mod config_source;
mod default;
mod env;
mod file;
mod flatten;

pub use config_source::ConfigSource;
pub use default::DefaultSource;
pub use env::EnvSource;
pub use file::FileSource;
