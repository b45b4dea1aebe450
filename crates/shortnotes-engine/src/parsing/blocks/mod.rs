//! # Block Parsing
//!
//! Two-phase parsing of block-editor markup into a tree of [`Block`]s.
//!
//! ## Parsing Phases
//!
//! 1. **Classification** (`classify`): `MarkerClassifier` splits the markup
//!    into HTML runs and block marker comments
//!
//! 2. **Block Construction** (`builder`): `BlockBuilder` keeps a stack of
//!    open blocks and emits a [`Block`] each time an end marker matches
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`, `InnerContent`)
//! - **`kinds`**: `BlockComment`, owner of the marker syntax
//! - **`classify`**: `MarkerClassifier` producing `Token`s
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks appear in marker order; nesting mirrors marker nesting
//! - Unknown block names become `BlockKind::Other`, content kept verbatim
//! - Only a start marker without an end marker is an error
//! - Nesting is capped at [`builder::MAX_DEPTH`]; the scan never recurses

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, MAX_DEPTH};
pub use classify::{MarkerClassifier, Token};
pub use types::{Block, BlockKind, InnerContent};
