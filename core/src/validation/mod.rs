pub mod ident;

pub use ident::{is_valid_sensor_id, validate_vin};
