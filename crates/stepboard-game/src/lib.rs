//! Game session for stepboard: turn sequencing and the interface to the host grid.

pub mod config;
pub mod error;
pub mod host;
pub mod session;

pub use config::SessionConfig;
pub use error::{ConfigError, SessionError};
pub use host::{BoardHost, NullHost};
pub use session::{GameSession, Phase};
