mod collection_response;
pub use collection_response::*;

mod fetch_api;
pub use fetch_api::*;

mod fetch_resources;
pub use fetch_resources::*;
