use fairshare_application::{GroupSnapshot, SnapshotError};
use fairshare_domain::{Expense, MemberId, Settlement};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

const SPLIT_KEY: &str = "splitMode";
const LEGACY_SPLIT_KEY: &str = "splitType";

/// A parsed group file: the records plus whatever display names it carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDocument {
    pub snapshot: GroupSnapshot,
    pub display_names: HashMap<MemberId, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MemberEntry {
    Id(MemberId),
    Profile {
        id: MemberId,
        #[serde(default, alias = "displayName")]
        name: Option<String>,
    },
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default, alias = "roster")]
    members: Vec<MemberEntry>,
    #[serde(default)]
    expenses: Vec<Value>,
    #[serde(default)]
    settlements: Vec<Settlement>,
}

/// Parses a group document.
///
/// Members may be bare ids or `{ "id", "name" }` profiles. Expenses written with
/// the older `splitType` key are accepted as if it were `splitMode`.
pub fn parse_group_document(json: &str) -> Result<GroupDocument, SnapshotError> {
    let raw: RawDocument = serde_json::from_str(json).map_err(|err| SnapshotError::Malformed {
        detail: err.to_string(),
    })?;

    let mut roster = Vec::with_capacity(raw.members.len());
    let mut display_names = HashMap::new();
    for entry in raw.members {
        match entry {
            MemberEntry::Id(id) => roster.push(id),
            MemberEntry::Profile { id, name } => {
                if let Some(name) = name {
                    display_names.insert(id.clone(), name);
                }
                roster.push(id);
            }
        }
    }

    let expenses = raw
        .expenses
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_expense(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        member_count = roster.len(),
        expense_count = expenses.len(),
        settlement_count = raw.settlements.len(),
        "Group document parsed"
    );

    Ok(GroupDocument {
        snapshot: GroupSnapshot::new(roster, expenses, raw.settlements),
        display_names,
    })
}

fn decode_expense(index: usize, mut value: Value) -> Result<Expense, SnapshotError> {
    if let Value::Object(fields) = &mut value
        && !fields.contains_key(SPLIT_KEY)
        && let Some(mode) = fields.remove(LEGACY_SPLIT_KEY)
    {
        fields.insert(SPLIT_KEY.to_owned(), mode);
    }

    serde_json::from_value(value).map_err(|err| SnapshotError::Malformed {
        detail: format!("expense #{index}: {err}"),
    })
}
