pub mod error;
pub mod event;
pub mod turn;

pub use error::{Error, Result};
pub use event::*;
pub use turn::*;
