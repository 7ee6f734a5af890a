pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::Floor;
pub use structs::Trip;
