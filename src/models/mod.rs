pub mod common;
pub mod ctx;
pub mod resource_details;
pub mod resources;
pub mod tags;
