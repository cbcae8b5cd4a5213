pub mod cli;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod util;


pub use config::{ConfigValidator, HmtlConfig, ValidationError};
pub use error::{HmtlError, Result};
pub use session::{RecordFailurePolicy, Session, SessionConfig, SessionState, TransferReport};
