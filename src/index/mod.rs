pub mod convert;
pub mod locate;
pub mod reader;
pub mod stats;
pub mod types;
pub mod verify;
pub mod writer;

pub use convert::{to_absolute, Conversion};
pub use locate::{AyahLocation, Locator, PageSummary};
pub use reader::{load_index, parse_index};
pub use types::*;
pub use verify::{verify, Violation};
pub use writer::{index_to_string, write_index};
