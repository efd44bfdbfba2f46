//! # workorders
//!
//! Fetches a project work-order listing over HTTP and renders the response
//! as readable JSON, without ever parsing it into a value tree.
//!
//! The rendering core is three small text-level routines:
//!
//! - [`reformat`] rewrites compact JSON text with two-space indentation and
//!   one structural element per line, in a single quote-aware pass
//! - [`escape`] turns an arbitrary string into a fragment safe to embed
//!   inside a double-quoted JSON string literal
//! - [`count_occurrences`] counts a literal marker substring, used as an
//!   approximate item count
//!
//! All three are total functions: they never fail or panic, whatever the
//! input. [`reformat`] assumes well-formed (or empty) JSON text and is
//! best-effort on anything else; it does not validate.
//!
//! ## Command-Line Tool
//!
//! The `workorders` binary wires the core to its collaborators: a `.env`
//! settings loader ([`env_file`]), a blocking HTTP fetch ([`fetch`]), and an
//! envelope writer ([`envelope`]).
//!
//! ```sh
//! # Fetch the listing using the API_KEY from ./.env
//! workorders
//!
//! # Point at a different settings file or endpoint
//! workorders --env-path /path/to/.env --url http://localhost:8080/workorders
//! ```
//!
//! The process always exits 0; the printed envelope's `success` flag carries
//! the outcome:
//!
//! ```json
//! {
//!   "success": true,
//!   "count": 2,
//!   "data": { ... }
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use workorders::reformat;
//!
//! let pretty = reformat(r#"{"a":1,"b":[1,2,3]}"#);
//! println!("{}", pretty);
//! ```

mod count;
mod error;
mod escape;
mod reformat;

pub mod env_file;
pub mod envelope;
pub mod fetch;

pub use crate::count::count_occurrences;
pub use crate::error::WorkOrderError;
pub use crate::escape::escape;
pub use crate::reformat::reformat;
