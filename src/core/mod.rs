pub mod error;
pub mod user;

pub use error::{BackendError, BackendResult};
pub use user::User;
