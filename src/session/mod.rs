pub mod app;
pub mod types;

pub use self::app::{run_session, Session};
pub use self::types::Response;
