pub mod container;
pub mod error;
pub mod loader;
pub mod operation;
pub mod random;
pub mod report;
pub mod runner;
pub mod timer;
pub mod workload;

pub use container::{Container, Family, Kind};
pub use error::{Error, Result};
pub use operation::Operation;
pub use random::RandomSource;
pub use report::{Averages, ConsoleReporter, Reporter, TableReporter};
pub use runner::{OperationResult, Runner};
pub use workload::Workload;
