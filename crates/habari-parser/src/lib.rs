//! Filename parsing for habari.
//!
//! ```
//! let metadata = habari_parser::parse("[SubsPlease] Cowboy Bebop - 05 (1080p) [A1B2C3D4].mkv");
//!
//! assert_eq!(metadata.title, "Cowboy Bebop");
//! assert_eq!(metadata.episode_number, vec!["05"]);
//! assert_eq!(metadata.release_group, "SubsPlease");
//! ```

pub mod keyword;
mod parser;
mod tokenizer;

pub use parser::parse;
