//! Application layer: session state and use cases
//!
//! This layer owns the current tree on behalf of the shell and drives the
//! domain builders and queries.

pub mod console;
pub mod error;
pub mod error_ext;
pub mod session;

pub use console::{ConsoleBuilder, DEFAULT_SENTINEL};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::{Session, TreeStats};
