//! # mdfence
//!
//! Escapes `<` and `>` inside fenced code blocks of a Markdown document so
//! that HTML-like code samples are not read as markup by a later renderer.
//! Text outside code fences is left untouched.
//!
//! ## Quick Start
//!
//! ```
//! use mdfence::escape_code_fences;
//!
//! let md = "Example:\n```html\n<div>\n```\n<div>kept</div>";
//! assert_eq!(
//!     escape_code_fences(md),
//!     "Example:\n```html\n&ltdiv&gt\n```\n<div>kept</div>"
//! );
//! ```
//!
//! ## Scanning Rules
//!
//! - A line starting with three backticks toggles the code region, except
//!   the very first line of the document, which never toggles.
//! - Inside a code region only the first `<` and the first `>` of each line
//!   are replaced, by `&lt` and `&gt` (no semicolon).
//! - Fence lines themselves are never escaped.
//! - An unclosed fence leaves the rest of the document inside code.
//!
//! ## Pipelines
//!
//! [`FenceEscaper`] implements [`Preprocessor`] and offers
//! [`FenceEscaper::escape_ready`] for async callers:
//!
//! ```
//! use mdfence::{FenceEscaper, Preprocessor};
//!
//! let steps: Vec<Box<dyn Preprocessor>> = vec![Box::new(FenceEscaper::new())];
//! let out = steps
//!     .iter()
//!     .fold("a\n```\n<b>\n```".to_string(), |md, step| step.process(&md));
//! assert_eq!(out, "a\n```\n&ltb&gt\n```");
//! ```

pub mod error;
pub mod escaper;
pub mod io;
pub mod markdown;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use escaper::{
    Escaped, FenceEscaper, Options, Preprocessor, ScanReport, escape_code_fences,
    escape_code_fences_with,
};
