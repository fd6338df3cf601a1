mod detail;
mod saved;
mod table;

pub use detail::JudgePage;
pub use saved::{SavedJudgeList, SavedJudges};
pub use table::JudgeTable;

use shared_types::JudgeRecord;

/// Up to two detail values, joined for a one-line summary cell.
pub(crate) fn judge_summary(judge: &JudgeRecord) -> String {
    let summary = judge
        .detail_rows()
        .into_iter()
        .take(2)
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" · ");
    if summary.is_empty() {
        "—".to_string()
    } else {
        summary
    }
}
