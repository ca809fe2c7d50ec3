//! # litejson
//!
//! A self-contained JSON value model with a recursive-descent parser
//! (text → tree) and a writer (tree → text).
//!
//! The core is a pure, synchronous transformation: an immutable input
//! buffer goes in, a freshly allocated [`Value`] tree or output string
//! comes out. There is no streaming, no schema validation, and no I/O.
//! Two opt-in extensions to RFC 8259 are supported: `//` and `/* */`
//! comments on the way in (behind an explicit flag), and a choice between
//! raw UTF-8 and fully `\u`-escaped ASCII on the way out.
//!
//! ## Quick start
//!
//! ```rust
//! use litejson::{parse, Value};
//!
//! let doc = parse(r#"{"name":"Alice","scores":[95,87,92]}"#, false).unwrap();
//! assert_eq!(doc["name"].as_str(), Some("Alice"));
//! assert_eq!(doc["scores"][1].as_u64(), Some(87));
//!
//! // Compact and pretty rendering round-trip the same tree.
//! assert_eq!(doc.dump(0, true), r#"{"name":"Alice","scores":[95,87,92]}"#);
//! assert_eq!(
//!     parse(&doc.dump(2, true), false).unwrap(),
//!     doc,
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`Value`] tree and its accessors/mutators
//! - [`parser`] — text → [`Value`], first-error reporting with line numbers
//! - [`writer`] — [`Value`] → text, compact or indented
//! - [`utf8`] — scalar ↔ UTF-8 codec used by the escape paths
//! - [`error`] — [`JsonError`] and the crate [`Result`] alias

pub mod error;
pub mod parser;
pub mod utf8;
pub mod value;
pub mod writer;

pub use error::{JsonError, Result};
pub use parser::parse;
pub use value::{Number, Value, ValueKind};
pub use writer::write;
