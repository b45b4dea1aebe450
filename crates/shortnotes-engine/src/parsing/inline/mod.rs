//! # Inline Scanning
//!
//! Cursor-based scanning of the HTML fragments held inside blocks.
//!
//! ## Modules
//!
//! - **`kinds`**: Markup types with owned delimiters (Anchor, Tag, Comment)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`links`**: `extract_links()` lazy iterator over anchor targets
//! - **`strip`**: `strip_tags()` and friends, producing plain text
//!
//! Neither scanner recurses; both run in a single left-to-right pass.

pub mod cursor;
pub mod kinds;
pub mod links;
pub mod strip;

pub use links::{Link, Links, extract_links};
pub use strip::{collapse_whitespace, inline_text, strip_tags};
