mod command;
mod error;
mod value_object;

pub use command::*;
pub use error::*;
pub use value_object::*;
