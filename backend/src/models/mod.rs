pub mod paint;
pub mod quotation;
pub mod reference;
pub mod summary;

pub use paint::*;
pub use quotation::*;
pub use reference::*;
pub use summary::*;
