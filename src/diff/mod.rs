//! Diff engine: alignment of token sequences and mark request generation.
//!
//! The same LCS alignment ([`opcodes`]) runs at two granularities. At the
//! outer pass tokens are the lines of an aligned page pair
//! ([`diff_lines`]); lines replaced at the same position are refined at the
//! inner pass where tokens are words ([`diff_words`]).
//!
//! # Example
//!
//! ```
//! use pagediff::diff::diff_lines;
//! use pagediff::{DocumentId, Granularity, MarkRequest};
//!
//! let a = ["The cat sat"];
//! let b = ["The dog sat"];
//! let requests = diff_lines(0, &a, &b, Granularity::Word);
//!
//! assert_eq!(
//!     requests,
//!     vec![
//!         MarkRequest::word(DocumentId::A, 0, "cat"),
//!         MarkRequest::word(DocumentId::B, 0, "dog"),
//!     ]
//! );
//! ```

mod lcs;
mod line;
mod tokenize;
mod word;

pub use lcs::{opcodes, Opcode};
pub use line::diff_lines;
pub use tokenize::{is_blank, split_words};
pub use word::{diff_words, similarity};
