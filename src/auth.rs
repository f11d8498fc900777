//! Auth-domain models and the session service: token secrets, JWT claims, persisted session
//! records, and single-flight token refresh.

pub mod claims;
pub mod secret;
pub mod service;
pub mod session;

pub use claims::*;
pub use secret::*;
pub use service::*;
pub use session::*;
