//! Build rules for the Burgerlib source tree.
//!
//! The crate backs the `burgerbuild` command line tool: it creates the
//! generated headers before an IDE build, distributes build output into
//! the per-platform SDK tree afterwards, renders the documentation
//! support files and writes the project files for every platform and
//! IDE combination Burgerlib ships for.
//!
//! The library half exposes the rule hooks and the helpers they are
//! made of, so individual steps can be driven from other tools.

/// Contains the character set table renderer
pub mod charsets;
/// Contains the documentation pipeline
pub mod docs;
/// Contains the error type shared by every operation
pub mod errors;
/// Contains the header generation and distribution steps
pub mod headers;
/// Contains the content hashing used for change detection
pub mod hasher;
/// Contains the project file generation matrix and assembler
pub mod project;
/// Contains the per-directory rule sets
pub mod rules;
/// Contains the change-gated copy and cleanup primitives
pub mod sync;
/// Contains logging, configuration and subprocess helpers
pub mod utils;
