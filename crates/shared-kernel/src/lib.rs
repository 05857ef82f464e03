// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CodestatError, ConfigResult, ConfigurationError, ErrorContext, InfraResult, InfrastructureError,
    PoolError, PoolResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileExtension, FilePath};
