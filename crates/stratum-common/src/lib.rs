//! # stratum-common
//!
//! Common types and constants for the Stratum storage engine.
//!
//! This crate provides the foundational pieces shared by every engine
//! component:
//!
//! - **Types**: core identifiers such as [`PageId`]
//! - **Constants**: system-wide constants and limits
//!
//! ## Example
//!
//! ```rust
//! use stratum_common::types::PageId;
//! use stratum_common::constants::PAGE_SIZE;
//!
//! let page_id = PageId::new(42);
//! assert!(page_id.is_valid());
//! assert_eq!(PAGE_SIZE, 4096);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod types;

// Re-export commonly used items at the crate root
pub use constants::*;
pub use types::PageId;
