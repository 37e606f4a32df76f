#![allow(clippy::module_inception)]

pub mod constants;
pub mod models;
pub mod runtime;
pub mod types;

pub use hub_derive::Model;
