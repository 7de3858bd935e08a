mod controller;
pub mod effects;
mod transport;

pub use controller::*;
pub use transport::*;
