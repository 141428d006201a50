//! Planner session: live plan, catalog, and history in one place

use super::engine::{self, AddOutcome, RemoveOutcome};
use super::history::History;
use super::requirements::{requirement_progress, RequirementProgress};
use super::suggest::{suggest, Suggestions};
use crate::core::error::PlannerError;
use crate::core::models::{Catalog, Code, Credits, DegreePlan, RequirementCategory, Semester, Tag, Year};
use crate::core::storage::PlannerData;
use crate::info;
use std::collections::BTreeSet;

/// Callback run with the live plan after every commit, undo, or redo
pub type PlanListener = Box<dyn FnMut(&DegreePlan)>;

/// One user's planning session
///
/// The session owns the catalog, the live plan, and its history. Every
/// successful mutation is committed to the history before the call returns,
/// and registered listeners are told about the new plan.
pub struct PlannerSession {
    catalog: Catalog,
    categories: Vec<RequirementCategory>,
    plan: DegreePlan,
    history: History<DegreePlan>,
    listeners: Vec<PlanListener>,
}

impl PlannerSession {
    /// Start a session with an unbounded history
    #[must_use]
    pub fn new(catalog: Catalog, plan: DegreePlan, categories: Vec<RequirementCategory>) -> Self {
        Self::with_history_limit(catalog, plan, categories, 0)
    }

    /// Start a session keeping at most `history_limit` undo steps (0 means unbounded)
    #[must_use]
    pub fn with_history_limit(
        catalog: Catalog,
        plan: DegreePlan,
        categories: Vec<RequirementCategory>,
        history_limit: usize,
    ) -> Self {
        Self {
            history: History::with_limit(plan.clone(), history_limit),
            catalog,
            categories,
            plan,
            listeners: Vec::new(),
        }
    }

    /// Start a session from loaded planner data
    #[must_use]
    pub fn from_data(data: PlannerData, history_limit: usize) -> Self {
        Self::with_history_limit(data.catalog, data.plan, data.categories, history_limit)
    }

    /// Module catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Live degree plan
    #[must_use]
    pub const fn plan(&self) -> &DegreePlan {
        &self.plan
    }

    /// Requirement categories
    #[must_use]
    pub fn categories(&self) -> &[RequirementCategory] {
        &self.categories
    }

    /// Undo/redo history
    #[must_use]
    pub const fn history(&self) -> &History<DegreePlan> {
        &self.history
    }

    /// Register a listener for plan changes
    pub fn subscribe(&mut self, listener: impl FnMut(&DegreePlan) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add `codes` (and their missing co-requisites) to a slot, then commit
    ///
    /// # Errors
    /// See [`engine::plan_add`]; the plan is unchanged on error.
    pub fn add_modules(
        &mut self,
        year: Year,
        semester: Semester,
        codes: &BTreeSet<Code>,
    ) -> Result<AddOutcome, PlannerError> {
        let mutation = engine::plan_add(&self.plan, &self.catalog, year, semester, codes)?;
        let outcome = mutation.apply_to(&mut self.plan);
        self.commit();
        Ok(outcome)
    }

    /// Remove `codes` (and their co-requisites) from the plan, then commit
    ///
    /// # Errors
    /// See [`engine::plan_remove`]; the plan is unchanged on error.
    pub fn remove_modules(&mut self, codes: &BTreeSet<Code>) -> Result<RemoveOutcome, PlannerError> {
        let mutation = engine::plan_remove(&self.plan, &self.catalog, codes)?;
        let outcome = mutation.apply_to(&mut self.plan);
        self.commit();
        Ok(outcome)
    }

    /// Rank unplanned modules; see [`suggest`]
    #[must_use]
    pub fn suggest(&self, credits: Credits, tags: &BTreeSet<Tag>, limit: usize) -> Suggestions {
        suggest(&self.catalog, &self.plan, credits, tags, limit)
    }

    /// Progress of the plan towards each requirement category
    #[must_use]
    pub fn requirement_progress(&self) -> Vec<RequirementProgress> {
        requirement_progress(&self.categories, &self.catalog, &self.plan)
    }

    /// Snapshot the live plan into the history
    pub fn commit(&mut self) {
        self.history.commit(self.plan.clone());
        info!(
            "Committed degree plan ({} undo step(s) available)",
            self.history.undo_depth()
        );
        self.notify();
    }

    /// Restore the previous snapshot
    ///
    /// # Errors
    /// Returns `PlannerError::NoUndoableState` when nothing can be undone.
    pub fn undo(&mut self) -> Result<(), PlannerError> {
        self.plan = self.history.undo()?.clone();
        info!("Undo: {} step(s) left", self.history.undo_depth());
        self.notify();
        Ok(())
    }

    /// Restore the next snapshot
    ///
    /// # Errors
    /// Returns `PlannerError::NoRedoableState` when nothing can be redone.
    pub fn redo(&mut self) -> Result<(), PlannerError> {
        self.plan = self.history.redo()?.clone();
        info!("Redo: {} step(s) left", self.history.redo_depth());
        self.notify();
        Ok(())
    }

    /// Copy of the session's data for saving
    #[must_use]
    pub fn to_data(&self) -> PlannerData {
        PlannerData {
            catalog: self.catalog.clone(),
            plan: self.plan.clone(),
            categories: self.categories.clone(),
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.plan);
        }
    }
}
