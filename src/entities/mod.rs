// Entity Models
// Each entity carries an opaque identity assigned before persistence.

pub mod hoa;

pub use hoa::{Hoa, HoaData, UNAVAILABLE_AGENT};
