//! Handlers for recording and querying ledger entries.

mod add;
mod list;
mod report;
mod search;

pub use add::{handle_deposit, handle_payment};
pub use list::handle_list;
pub use report::handle_report;
pub use search::handle_search;
