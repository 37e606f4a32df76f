mod action;
pub use action::*;

mod event;
pub use event::*;

mod internal;
pub use internal::*;

mod msg;
pub use msg::*;

mod transition;
pub use transition::*;
