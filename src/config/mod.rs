mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{Config, PlanFileConfig, RequiredSetbacks, RuleLimits, Weightage};
