mod context;

pub mod locate;
pub mod stats;
pub mod turns;

pub use context::HandlerContext;
