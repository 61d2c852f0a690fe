//! Core types shared by the `didoc` crates.
pub mod error;
pub mod one_or_many;
pub mod uri;

pub use error::FormatError;
pub use one_or_many::OneOrMany;
pub use uri::URI;
