pub mod selection;
pub mod store;

pub use selection::*;
pub use store::*;
