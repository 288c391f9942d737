//! Low-level scanner for log lines.
//!
//! Splits one line of free-form log text into `(RawTag, len)` pairs without
//! allocating token values. Everything the higher layer (`logsig`) needs to
//! classify a span lives here: byte classes, the hex/address state machine,
//! the dotted-numeric recognizer, the timestamp grammars and the URL
//! recognizer.
//!
//! # Architecture
//!
//! ```text
//! &str ──► SourceBuffer (sentinel-terminated)
//!              │
//!              ▼
//!          Cursor ──► RawScanner::next_token() ──► RawToken { tag, len }
//!                          │
//!                          ├─ time::scan_time
//!                          ├─ hex::scan_address
//!                          ├─ numeric::scan_numeric
//!                          ├─ url::scan_url
//!                          └─ literal / punctuation fallback
//! ```
//!
//! Recognizers are pure functions over the remaining input bytes and report
//! the length they matched; the scanner owns the cursor and never moves it
//! backward.

pub mod class;
mod cursor;
pub mod hex;
pub mod numeric;
mod raw_scanner;
mod source_buffer;
mod tag;
pub mod time;
pub mod url;

pub use cursor::Cursor;
pub use hex::{AddressScan, HexScan, HexShape, HexState, HexStep};
pub use raw_scanner::{RawScanner, ScanRules};
pub use source_buffer::{SourceBuffer, SourceTooLarge, MAX_SOURCE_LEN};
pub use tag::{RawTag, RawToken};
pub use time::{Elem, TimeGrammar, BUILTIN_GRAMMARS};
pub use url::DEFAULT_URL_SCHEMES;
