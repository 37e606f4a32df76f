pub mod env;
pub mod load;
pub mod model;

pub use env::{init_tracing, NativeEnv};
pub use load::{load_resource_details, load_resources, load_tags};
pub use model::{NativeModel, NativeModelField};
