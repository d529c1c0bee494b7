pub mod logic;

pub use logic::{AsilLevel, SafetyLogic};
