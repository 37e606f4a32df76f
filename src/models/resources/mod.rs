mod dispatcher;
pub use dispatcher::*;

mod reducer;
pub use reducer::*;

mod resources;
pub use resources::*;
