//! Persistence for Cashbook records.
//!
//! ## Architecture
//!
//! The storage layer separates the line format from where lines live:
//! - `Backend` moves raw lines in and out (flat file on disk, or memory)
//! - `Ledger` parses lines into records on load and owns the in-memory
//!   collection for the rest of the session
//!
//! Writes are append-only. A record joins the in-memory collection only
//! after its line has been written to the backend.

pub mod flat_file;
pub mod ledger;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export public types
pub use flat_file::FlatFile;
pub use ledger::{load, Ledger, Loaded};
pub use memory::MemoryBackend;
pub use traits::Backend;
pub use types::{LoadPolicy, LoadReport};
