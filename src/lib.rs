pub mod error;
pub mod model;
pub mod sim;
pub mod strategy;
pub mod trace;

pub use error::{SimError, SimResult};

#[cfg(test)]
mod test;
