pub mod assistant;
pub mod directory;
pub mod engine;
pub mod profile;
pub mod query;

pub use crate::domain::model::{Dataset, Employee, EmployeeFilter, FilterFacets};
pub use crate::domain::ports::{DatasetSource, EmployeeDirectory};
pub use crate::utils::error::Result;
