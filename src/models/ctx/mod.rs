mod config;
pub use config::*;

mod error;
pub use error::*;

mod ctx;
pub use ctx::*;
