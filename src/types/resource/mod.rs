mod resource_record;
pub use resource_record::*;

mod tag;
pub use tag::*;
