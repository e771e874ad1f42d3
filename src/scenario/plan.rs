use crate::args::{ScenarioKind, StressArgs};
use crate::catalog::Catalog;
use crate::error::{AppError, AppResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioStep {
    pub kind: ScenarioKind,
    /// `n` for the scenario: user count for the word scenarios, fan-out size otherwise.
    pub count: usize,
}

/// Ordered steps of a run. Each step completes before the next starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPlan {
    pub steps: Vec<ScenarioStep>,
}

impl ScenarioPlan {
    #[must_use]
    pub fn from_args(args: &StressArgs, catalog: &Catalog) -> Self {
        let user_count = args.user_count.unwrap_or(catalog.users.len());
        let steps = args
            .selected_scenarios()
            .into_iter()
            .map(|kind| {
                let count = match kind {
                    ScenarioKind::UpdateWords | ScenarioKind::GetWords => user_count,
                    ScenarioKind::Leaderboard => args.leaderboard_requests,
                    ScenarioKind::Dashboard => args.dashboard_requests,
                };
                ScenarioStep { kind, count }
            })
            .collect();
        Self { steps }
    }

    /// Rejects word scenarios that would index past the user list, before any
    /// request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error when a word scenario's count exceeds the catalog users.
    pub fn validate(&self, catalog: &Catalog) -> AppResult<()> {
        let available = catalog.users.len();
        for step in &self.steps {
            let is_word_step = matches!(
                step.kind,
                ScenarioKind::UpdateWords | ScenarioKind::GetWords
            );
            if is_word_step && step.count > available {
                return Err(AppError::validation(ValidationError::NotEnoughUsers {
                    requested: step.count,
                    available,
                }));
            }
        }
        Ok(())
    }
}
