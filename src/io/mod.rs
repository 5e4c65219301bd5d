pub mod layout;
pub mod report;
pub mod scan;
pub mod speaker_table;
pub mod sql;

pub use layout::*;
pub use report::*;
pub use scan::*;
pub use speaker_table::*;
pub use sql::*;
