mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::load_config;
pub use validation::{validate_build_config, validate_config};
