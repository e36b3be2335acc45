pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{EmbeddedSample, LocalJsonFile};
pub use config::{ConfiguredSource, DirectoryConfig};
pub use core::{
    assistant::{Assistant, Reply, ReplyKind},
    directory::InMemoryDirectory,
    engine::{Query, QueryEngine, QueryOutcome},
    profile::EmployeeProfile,
};
pub use domain::model::{Dataset, Employee, EmployeeFilter, FilterFacets};
pub use domain::ports::{DatasetSource, EmployeeDirectory};
pub use utils::error::{DirectoryError, Result};
