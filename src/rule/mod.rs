pub mod catalog;
pub mod condition;
pub mod group;
pub mod value;

pub use catalog::*;
pub use condition::*;
pub use group::*;
pub use value::*;
