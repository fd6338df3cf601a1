use shared_types::{CaseRecord, JudgeRecord, ProfileBookmarks};

/// The signed-in user's saved cases and judges, in server order.
///
/// Cases are keyed by id, judges by name. Removal keeps every entry that
/// does not match the key, so removing an absent key changes nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkSet {
    pub cases: Vec<CaseRecord>,
    pub judges: Vec<JudgeRecord>,
}

impl From<ProfileBookmarks> for BookmarkSet {
    fn from(profile: ProfileBookmarks) -> Self {
        Self {
            cases: profile.case_bookmarks,
            judges: profile.judge_bookmarks,
        }
    }
}

impl BookmarkSet {
    /// Sequence lengths; a change in either triggers a profile refresh.
    pub fn lengths(&self) -> (usize, usize) {
        (self.cases.len(), self.judges.len())
    }

    pub fn has_case(&self, case_id: &str) -> bool {
        self.cases.iter().any(|c| c.id == case_id)
    }

    pub fn has_judge(&self, name: &str) -> bool {
        self.judges.iter().any(|j| j.name == name)
    }

    /// Returns whether anything was removed.
    pub fn remove_case(&mut self, case_id: &str) -> bool {
        let before = self.cases.len();
        self.cases.retain(|c| c.id != case_id);
        self.cases.len() != before
    }

    /// Returns whether anything was removed.
    pub fn remove_judge(&mut self, name: &str) -> bool {
        let before = self.judges.len();
        self.judges.retain(|j| j.name != name);
        self.judges.len() != before
    }

    /// Append unless a case with the same id is already saved.
    pub fn add_case(&mut self, case: CaseRecord) -> bool {
        if self.has_case(&case.id) {
            return false;
        }
        self.cases.push(case);
        true
    }

    /// Append unless a judge with the same name is already saved.
    pub fn add_judge(&mut self, judge: JudgeRecord) -> bool {
        if self.has_judge(&judge.name) {
            return false;
        }
        self.judges.push(judge);
        true
    }
}
