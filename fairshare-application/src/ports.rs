use crate::{error::SnapshotError, model::GroupSnapshot};
use fairshare_domain::MemberId;
use std::collections::HashMap;

/// Supplies the latest known records of one group.
pub trait RecordSource: Send + Sync {
    fn snapshot(&self) -> Result<GroupSnapshot, SnapshotError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: &MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.get(member_id).map(String::as_str)
    }
}
