//! Operation inputs.

mod bucket;
mod list;
mod multipart;
mod object;

pub use bucket::*;
pub use list::*;
pub use multipart::*;
pub use object::*;
