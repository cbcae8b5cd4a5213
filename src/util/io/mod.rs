pub mod serial;
pub mod transport;

pub use serial::{SerialTransport, DEFAULT_BAUD_RATE};
pub use transport::LineTransport;
