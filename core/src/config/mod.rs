pub mod env;

pub use env::{load_environment_config, service_name, DEFAULT_SERVICE_NAME, SERVICE_NAME_KEY};
