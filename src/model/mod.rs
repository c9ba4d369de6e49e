mod collection;
mod identity;

pub use collection::*;
pub use identity::*;
