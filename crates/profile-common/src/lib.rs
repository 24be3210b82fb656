//! OpenProfile Common - Shared types for profile field plugins
//!
//! This crate provides the pieces every field type needs:
//! - Field definition and user data records
//! - The `ProfileField` plugin lifecycle contract
//! - Host seams: form builder, storage, capability policy, text filter
//! - Error handling
//!
//! Field types (menu, text, checkbox, ...) live in their own crates and
//! implement [`ProfileField`] against these seams. The host framework
//! owns persistence, form rendering, and permission checks; plugins only
//! see them through the traits defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod form;
pub mod model;
pub mod policy;
pub mod store;
pub mod text;

pub use error::*;
pub use field::*;
pub use form::*;
pub use model::*;
pub use policy::*;
pub use store::*;
pub use text::*;
