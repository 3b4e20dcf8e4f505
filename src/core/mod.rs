//! Core configuration management types.

mod accessors;
mod builder;
mod snapshot;
mod store;
mod validation;
mod value;

pub use builder::ConfigStoreBuilder;
pub use snapshot::Snapshot;
pub use store::ConfigStore;
pub use validation::Validator;
pub use value::{ConfigValue, ValueKind};

#[cfg(feature = "validation")]
pub use validation::{RangeValidator, RequiredValidator, TypeValidator};
