pub mod constraints;
pub mod destinations;
pub mod encode;

pub use constraints::constraints_command;
pub use destinations::destinations_command;
pub use encode::encode_destination_command;
pub use test::test_command;
