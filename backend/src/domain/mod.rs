//! Domain primitives, services, and ports.
//!
//! Purpose: model directory entries independently of HTTP and storage. Types
//! here enforce the field invariants; adapters translate at the edges.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failures.
//! - User, UserId, UserProfile, EmailAddress — the aggregate and its parts.
//! - UserDirectoryService — use cases over a [`ports::UserRepository`].
//! - TraceId — request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::error::{DUPLICATE_EMAIL_MESSAGE, Error, ErrorCode, VALIDATION_FAILED_MESSAGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, User, UserId, UserIdError, UserProfile};
pub use self::user_directory_service::UserDirectoryService;
