//! Purpose: Define the stable public API surface for the roster library.
//! Exports: The endpoint client, roster store, stats helpers, and core types.
//! Role: The only public path to the store and client; wire structs stay private.
mod endpoint;
mod stats;
mod store;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::record::{AgeBand, RecordDraft, RecordForm, StudentRecord};
pub use crate::notice::{Notice, NoticeKind};
pub use endpoint::EndpointClient;
pub use stats::{RosterStats, average_age, summarize};
pub use store::{RosterSnapshot, RosterStore};
