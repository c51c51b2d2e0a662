//! Common-indentation stripping for interpolated multi-line text.
//!
//! # Architecture
//!
//! The crate has two layers:
//!
//! - [`template`]: the fragment/value data model. A [`Template`] holds
//!   literal text fragments interleaved with substitution [`Value`]s,
//!   always one more fragment than values by construction.
//! - [`engine`]: the dedent pipeline. Trims a single trailing blank
//!   line, finds the minimum line-start indentation across all
//!   fragments, strips exactly that much after every line break, trims a
//!   single leading line break, then interpolates values — re-indenting
//!   any multi-line string value to the column it is inserted at.
//!
//! # Escape handling
//!
//! The engine does not interpret backslash escapes. Whatever front end
//! produces the fragments (a macro, a quoting layer, plain literals) is
//! responsible for collapsing suppressed line breaks and unescaping
//! delimiters first; fragments are inserted exactly as received.
//!
//! # Example
//!
//! ```
//! let text = undent::dedent(
//!     "
//!     create table users (
//!         id integer primary key
//!     );
//!     ",
//! );
//! assert_eq!(text, "create table users (\n    id integer primary key\n);");
//! ```

mod engine;
mod template;

pub use template::{Template, Value};

/// Strips the common indentation from an already-assembled string.
///
/// Equivalent to a one-fragment [`Template`] with no values. Cannot
/// fail: empty input, single-line input, and whitespace-only input all
/// produce well-defined output.
pub fn dedent(source: &str) -> String {
    engine::run(&[source], &[])
}
