//! Shared Kernel
//!
//! Vocabulary shared by every domain crate of the Pulse Manager backend:
//! - Unified application error (`AppError`, `ErrorKind`)
//! - Typed identifiers (`Id<T>`)
//!
//! Only things whose meaning is identical across the account and yard
//! domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
