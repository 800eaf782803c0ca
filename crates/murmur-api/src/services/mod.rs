//! Business rules between the HTTP handlers and storage. Services are
//! synchronous; handlers run them on the blocking pool.

pub mod accounts;
pub mod messages;

pub use accounts::AccountService;
pub use messages::MessageService;

#[cfg(test)]
pub(crate) mod fakes;
