//! Carries out reconciliation plans
//!
//! [`Reconciler`] ties the pure pieces together: read tags, classify, plan,
//! generate if needed, then apply each [`TagOperation`] in order. The first
//! failing operation aborts the run; earlier operations are not rolled back.

use crate::error::{IoError, Result};
use crate::reconcile::{self, Plan, TagOperation};
use crate::tags::{self, Classification};
use crate::tools::{TagStore, UuidSource};
use std::path::Path;
use uuid::Uuid;

/// What a reconciliation run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Plan after any generation was resolved
    pub plan: Plan,
    /// Operations that were carried out, in order
    pub applied: Vec<TagOperation>,
    /// UUID the file now carries
    pub uuid: Option<Uuid>,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Check that `path` names an existing regular file
pub fn check_target(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IoError::from_std(e).with_path(path))?;
    if !metadata.is_file() {
        return Err(IoError::not_a_file(path).into());
    }
    Ok(())
}

/// Brings one file's UUID tags into agreement
pub struct Reconciler<'a> {
    store: &'a dyn TagStore,
    generator: &'a dyn UuidSource,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler over the given tag store and UUID source
    pub fn new(store: &'a dyn TagStore, generator: &'a dyn UuidSource) -> Self {
        Self { store, generator }
    }

    /// Read and classify the tags on `path`
    pub fn inspect(&self, path: &Path) -> Result<Classification> {
        let raw = self.store.read_tags(path)?;
        log::debug!("Tags on {}: {:?}", path.display(), raw);

        let classification = tags::classify(&raw);
        if classification.has_duplicates() {
            log::warn!(
                "{} carries more than one UUID tag; keeping the first of each kind (extra DOI: {:?}, extra single: {:?})",
                path.display(),
                classification.extra_doi,
                classification.extra_single
            );
        }
        log::debug!(
            "Classified {}: single={:?} doi={:?}",
            path.display(),
            classification.single.as_ref().map(|t| t.uuid),
            classification.doi.as_ref().map(|t| t.uuid)
        );

        Ok(classification)
    }

    /// Work out what a run would do, without touching anything
    pub fn plan(&self, path: &Path, explicit: Option<Uuid>) -> Result<Plan> {
        let classification = self.inspect(path)?;
        Ok(reconcile::plan(&classification, explicit))
    }

    /// Reconcile the tags on `path`
    pub fn reconcile(&self, path: &Path, explicit: Option<Uuid>) -> Result<Outcome> {
        check_target(path)?;

        let classification = self.inspect(path)?;
        if explicit.is_some() && !classification.is_untagged() {
            log::info!("File already carries a UUID tag, ignoring the supplied UUID");
        }

        let plan = reconcile::plan(&classification, explicit);
        log::info!("{}: {plan}", path.display());

        let known = classification
            .single
            .as_ref()
            .or(classification.doi.as_ref())
            .map(|t| t.uuid);
        let mut outcome = self.apply(path, plan)?;
        outcome.uuid = outcome.uuid.or(known);
        Ok(outcome)
    }

    /// Carry out `plan` against `path`
    pub fn apply(&self, path: &Path, plan: Plan) -> Result<Outcome> {
        let plan = if plan.needs_generation() {
            let generated = self.generator.generate()?;
            plan.resolve(generated)
        } else {
            plan
        };

        let mut applied = Vec::new();
        for operation in plan.operations() {
            self.execute(&operation, path)?;
            applied.push(operation);
        }

        Ok(Outcome {
            uuid: plan.target(),
            plan,
            applied,
        })
    }

    fn execute(&self, operation: &TagOperation, path: &Path) -> Result<()> {
        log::info!("{operation} on {}", path.display());
        match operation {
            TagOperation::Add(tag) => self.store.add_tag(tag, path),
            TagOperation::Remove(tag) => self.store.remove_tag(tag, path),
        }
    }
}
