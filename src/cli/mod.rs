pub mod codec;
pub mod grid;

pub use codec::*;
pub use grid::*;
