mod fetch_state;
pub use fetch_state::*;
