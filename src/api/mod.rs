//! Remote API Repositories
//!
//! Translation layer between the use cases and the remote HTTP API,
//! organized by resource.

pub mod http;
mod lists;
mod users;

pub use lists::ListRepository;
pub use users::UserRepository;
