//! # Inquiry Core
//!
//! The narrowing engine for the Adivina guessing game. This crate
//! consumes the `word_bank` data model and drives one interactive
//! session: classify the target into a category, route to a subcategory
//! group, then filter that group's candidates question by question.
//!
//! ## Core Components
//!
//! - **interaction**: the blocking question/answer surface
//! - **narrowing**: entropy-driven attribute selection and filtering
//! - **routing**: the fixed classification tree and subcategory routers
//! - **session**: the category cache and the full play flow
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: all reasoning is boolean filtering, no belief
//!   model and no learning between games
//! - **Injectable**: the interaction surface and the table provider are
//!   traits, so the engine runs against scripts in tests
//! - **Degrading**: missing data narrows scope or ends a branch with a
//!   report, it never aborts a session

pub mod interaction;
pub mod narrowing;
pub mod routing;
pub mod session;

pub use interaction::*;
pub use narrowing::*;
pub use routing::*;
pub use session::*;
