//! # Inline Kinds
//!
//! Inline markup types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Anchor`**: `OPEN = b"<a"`, `HREF = b"href"`
//! - **`Tag`**: `OPEN = b'<'`, `CLOSE = b'>'`
//! - **`Comment`**: `OPEN = b"<!--"`, `CLOSE = b"-->"`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in scanner code.

pub mod anchor;
pub mod tag;

pub use anchor::Anchor;
pub use tag::{Comment, Tag};
