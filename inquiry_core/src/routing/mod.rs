//! Fixed routing - the top-level classification tree and the
//! per-category subcategory routers.
//!
//! Both structures are immutable domain data built once per session:
//! - **tree**: a binary yes/no tree whose leaves name a flow
//! - **router**: a priority-ordered question list with a majority
//!   fallback
//! - **catalog**: the fixed router tables of each category

mod catalog;
mod router;
mod tree;

pub use catalog::*;
pub use router::*;
pub use tree::*;
