mod env;
pub use env::*;

mod store;
pub use store::*;

mod thunk;
pub use thunk::*;
