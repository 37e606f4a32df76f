pub mod api;
pub mod resource;

mod deserialize_single_as_vec;
pub use deserialize_single_as_vec::*;

mod null_as_default;
pub use null_as_default::*;

mod number_as_u64;
pub use number_as_u64::*;
