//! # Rendering
//!
//! Derived plain-text artifacts of a parsed note.
//!
//! - **`quote`**: `format_quote()` turns a quote block into `“body” - citation`
//! - **`status`**: `transform()` flattens a whole note for a short-form service
//! - **`title`**: `format_title()` builds the descriptive `Note: …` title

pub mod quote;
pub mod status;
pub mod title;

pub use quote::{QuoteUnit, format_quote};
pub use status::{StatusOptions, TransformResult, transform, transform_with};
pub use title::{EnglishLocale, TitleLocale, TitleScan, format_title};
