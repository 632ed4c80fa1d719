//! # Presentation Layer
//!
//! Turns a parsed record into output. Nothing here knows which fields a
//! record has: everything goes through [`habari_types::Record`].
//!
//! ## 🏗️ Data Flow
//!
//! ```text
//! [ Command ] --> [ Record ] --> [ Renderer ] ==(JSON)==> [ formatters::json ] --> stdout
//!                                  (Driver)   ==(Text)==> [ formatters::text ] --> stdout
//! ```
//!
//! ## 📂 Directory Guide
//!
//! ### `formatters/`
//! * **What:** Pure functions from a record to a `String`.
//! * **Rule:** No I/O. `json.rs` keeps every field, `text.rs` drops empty ones
//!   and aligns the rest.
//!
//! ### `renderers/`
//! * **What:** Picks a formatter for the selected [`OutputFormat`](crate::types::OutputFormat)
//!   and writes the result.
//! * **Components:**
//!     * `console.rs`: stdout rendering.
//!     * `traits.rs`: the `Renderer` interface used by commands.

pub mod formatters;
pub mod renderers;

pub use renderers::{ConsoleRenderer, Renderer};
