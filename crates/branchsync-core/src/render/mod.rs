//! Text renderings of document values.
//!
//! Two renderings are used throughout the comparison pipeline:
//!
//! - [`display::display_value`] - the human-oriented display string written to
//!   the change report and used as the sort key for non-object array elements.
//! - [`json_text::to_json_text`] - compact JSON with `", "` / `": "` separators,
//!   used for record summaries and as the sort key for object array elements.

pub mod display;
pub mod json_text;

pub use display::display_value;
pub use json_text::{to_json_text, truncate_chars};
