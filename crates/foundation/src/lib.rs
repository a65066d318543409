pub mod color;
pub mod dims;
pub mod filter;
pub mod format;
pub mod names;
pub mod years;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use dims::*;
pub use filter::*;
pub use format::*;
pub use names::*;
pub use years::*;
