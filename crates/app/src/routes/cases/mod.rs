mod overview;
mod saved;
mod table;
mod update;

pub use overview::CaseOverview;
pub use saved::{SavedCaseList, SavedCases};
pub use table::CaseTable;
pub use update::CaseUpdate;
