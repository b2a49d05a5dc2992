//! Reconciliation state machine
//!
//! [`plan`] looks at a [`Classification`] and decides what has to change so
//! that the file ends up with one single tag and one DOI tag carrying the
//! same UUID. It performs no I/O; see [`crate::executor`] for that.

use crate::tags::{Classification, doi_tag, single_tag};
use std::fmt;
use uuid::Uuid;

/// Decision for one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Tags already agree
    NoAction,
    /// Add a bare tag for the UUID
    AddSingle(Uuid),
    /// Add a `uuid:` tag for the UUID
    AddDoi(Uuid),
    /// Add both tags for an already known UUID
    AddBoth(Uuid),
    /// Remove the mismatched bare tag, then add the DOI value as bare tag
    RemoveThenAdd { remove: String, add: Uuid },
    /// Untagged file: a fresh UUID must be generated and added twice
    GenerateAndAddBoth,
}

/// A single tag mutation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagOperation {
    Add(String),
    Remove(String),
}

impl fmt::Display for TagOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(tag) => write!(f, "add '{tag}'"),
            Self::Remove(tag) => write!(f, "remove '{tag}'"),
        }
    }
}

/// Decide what to do with a classified file
///
/// `explicit` is only consulted when the file has neither tag. In that case
/// it is added as the bare tag alone; the DOI tag follows on the next run.
pub fn plan(classification: &Classification, explicit: Option<Uuid>) -> Plan {
    let single = classification.single.as_ref();
    let doi = classification.doi.as_ref();

    match (single, doi) {
        (None, None) => match explicit {
            Some(uuid) => Plan::AddSingle(uuid),
            None => Plan::GenerateAndAddBoth,
        },
        (Some(single), None) => Plan::AddDoi(single.uuid),
        (None, Some(doi)) => Plan::AddSingle(doi.uuid),
        (Some(single), Some(doi)) if single.uuid == doi.uuid => Plan::NoAction,
        (Some(single), Some(doi)) => Plan::RemoveThenAdd {
            remove: single.raw.clone(),
            add: doi.uuid,
        },
    }
}

impl Plan {
    /// Whether carrying out this plan needs a freshly generated UUID
    pub fn needs_generation(&self) -> bool {
        matches!(self, Self::GenerateAndAddBoth)
    }

    /// Replace a pending generation with the generated value
    pub fn resolve(self, generated: Uuid) -> Self {
        match self {
            Self::GenerateAndAddBoth => Self::AddBoth(generated),
            other => other,
        }
    }

    /// Ordered tag mutations for this plan
    ///
    /// Returns an empty list for [`Plan::GenerateAndAddBoth`]; resolve it first.
    pub fn operations(&self) -> Vec<TagOperation> {
        match self {
            Self::NoAction | Self::GenerateAndAddBoth => Vec::new(),
            Self::AddSingle(uuid) => vec![TagOperation::Add(single_tag(uuid))],
            Self::AddDoi(uuid) => vec![TagOperation::Add(doi_tag(uuid))],
            Self::AddBoth(uuid) => vec![
                TagOperation::Add(single_tag(uuid)),
                TagOperation::Add(doi_tag(uuid)),
            ],
            Self::RemoveThenAdd { remove, add } => vec![
                TagOperation::Remove(remove.clone()),
                TagOperation::Add(single_tag(add)),
            ],
        }
    }

    /// UUID the file carries once the plan has been applied
    ///
    /// `None` only for an unresolved generation, or for [`Plan::NoAction`]
    /// where the caller already knows the value.
    pub fn target(&self) -> Option<Uuid> {
        match self {
            Self::NoAction | Self::GenerateAndAddBoth => None,
            Self::AddSingle(uuid) | Self::AddDoi(uuid) | Self::AddBoth(uuid) => Some(*uuid),
            Self::RemoveThenAdd { add, .. } => Some(*add),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAction => write!(f, "tags already agree"),
            Self::AddSingle(uuid) => write!(f, "add single tag {uuid}"),
            Self::AddDoi(uuid) => write!(f, "add DOI tag {}", doi_tag(uuid)),
            Self::AddBoth(uuid) => write!(f, "add single and DOI tags for {uuid}"),
            Self::RemoveThenAdd { remove, add } => {
                write!(f, "replace single tag '{remove}' with {add}")
            }
            Self::GenerateAndAddBoth => write!(f, "generate a new UUID and add both tags"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::classify;

    const A: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";
    const B: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

    fn uuid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn test_untagged_without_explicit_generates() {
        let plan = plan(&classify(&["Red"]), None);
        assert_eq!(plan, Plan::GenerateAndAddBoth);
        assert!(plan.needs_generation());
        assert!(plan.operations().is_empty());
    }

    #[test]
    fn test_untagged_with_explicit_adds_single_only() {
        let plan = plan(&classify::<&str>(&[]), Some(uuid(A)));
        assert_eq!(plan, Plan::AddSingle(uuid(A)));
        assert_eq!(plan.operations(), vec![TagOperation::Add(A.to_string())]);
    }

    #[test]
    fn test_explicit_ignored_when_tagged() {
        let plan = plan(&classify(&[A]), Some(uuid(B)));
        assert_eq!(plan, Plan::AddDoi(uuid(A)));
    }

    #[test]
    fn test_equal_tags_need_nothing() {
        let doi = format!("uuid:{}", A.to_uppercase());
        let plan = plan(&classify(&[doi.as_str(), A]), None);
        assert_eq!(plan, Plan::NoAction);
        assert!(plan.operations().is_empty());
    }

    #[test]
    fn test_single_only_adds_doi() {
        let plan = plan(&classify(&[A]), None);
        assert_eq!(
            plan.operations(),
            vec![TagOperation::Add(format!("uuid:{A}"))]
        );
    }

    #[test]
    fn test_doi_only_adds_single() {
        let doi = format!("uuid:{B}");
        let plan = plan(&classify(&[doi.as_str()]), None);
        assert_eq!(plan.operations(), vec![TagOperation::Add(B.to_string())]);
    }

    #[test]
    fn test_mismatch_removes_raw_single_then_adds_doi_value() {
        let doi = format!("uuid:{A}");
        let single = B.to_uppercase();
        let plan = plan(&classify(&[doi.as_str(), single.as_str()]), None);

        assert_eq!(
            plan.operations(),
            vec![
                TagOperation::Remove(single.clone()),
                TagOperation::Add(A.to_string()),
            ]
        );
        assert_eq!(plan.target(), Some(uuid(A)));
    }

    #[test]
    fn test_resolve_turns_generation_into_add_both() {
        let plan = Plan::GenerateAndAddBoth.resolve(uuid(B));
        assert_eq!(plan, Plan::AddBoth(uuid(B)));
        assert_eq!(
            plan.operations(),
            vec![
                TagOperation::Add(B.to_string()),
                TagOperation::Add(format!("uuid:{B}")),
            ]
        );
    }

    #[test]
    fn test_resolve_leaves_other_plans_alone() {
        assert_eq!(Plan::NoAction.resolve(uuid(A)), Plan::NoAction);
        assert_eq!(Plan::AddDoi(uuid(B)).resolve(uuid(A)), Plan::AddDoi(uuid(B)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Plan::AddDoi(uuid(A)).to_string(),
            format!("add DOI tag uuid:{A}")
        );
        assert_eq!(
            TagOperation::Remove("x".to_string()).to_string(),
            "remove 'x'"
        );
    }
}
