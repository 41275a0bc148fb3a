//! Core domain types

pub mod constraint;
pub mod destination;
pub mod locale;

pub use constraint::ConstraintToken;
pub use destination::Destination;
pub use locale::Locale;
