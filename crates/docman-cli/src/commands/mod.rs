//! Command implementations.

pub mod formats;
pub mod import;
pub mod list;
pub mod search;

pub use self::formats::execute_formats;
pub use self::import::{import_files, ImportSummary};
pub use self::list::execute_list;
pub use self::search::execute_search;
