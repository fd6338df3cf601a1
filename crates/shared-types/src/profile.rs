use serde::{Deserialize, Serialize};

use crate::{CaseRecord, JudgeRecord};

/// Response of `GET /profile/{user_id}`: the user's saved cases and judges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileBookmarks {
    #[serde(default)]
    pub case_bookmarks: Vec<CaseRecord>,
    #[serde(default)]
    pub judge_bookmarks: Vec<JudgeRecord>,
}
