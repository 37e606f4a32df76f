mod eq_update;
pub use eq_update::*;

mod loadable;
pub use loadable::*;
