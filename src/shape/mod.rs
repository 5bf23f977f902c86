mod model;
pub use model::*;

mod merge;
pub use merge::*;

mod expand;
pub use expand::*;

mod variant;
pub use variant::*;
