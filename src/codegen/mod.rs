mod emit;
pub use emit::*;

mod syntax;
pub use syntax::*;
