use tracing::{info, warn};
use url::Url;

use crate::args::{HttpMethod, ScenarioKind};
use crate::catalog::{Catalog, EndpointTemplate, TemplateParams};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{LoadDriver, RequestSpec};
use crate::shutdown::{ShutdownReceiver, wait_for_shutdown};

use super::plan::{ScenarioPlan, ScenarioStep};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { issued: usize },
    /// Shutdown arrived first. Later steps never started and in-flight requests were aborted.
    Interrupted,
}

pub struct ScenarioRunner<'run> {
    driver: &'run LoadDriver,
    catalog: &'run Catalog,
    base_url: &'run Url,
}

impl<'run> ScenarioRunner<'run> {
    #[must_use]
    pub const fn new(
        driver: &'run LoadDriver,
        catalog: &'run Catalog,
        base_url: &'run Url,
    ) -> Self {
        Self {
            driver,
            catalog,
            base_url,
        }
    }

    /// Runs every step in order and returns the total number of requests issued.
    ///
    /// # Errors
    ///
    /// Returns an error when a step cannot be built or its results cannot be delivered.
    pub async fn run(&self, plan: &ScenarioPlan) -> AppResult<usize> {
        let mut total: usize = 0;
        for step in &plan.steps {
            total = total.saturating_add(self.run_step(*step).await?);
        }
        Ok(total)
    }

    /// Runs the plan unless shutdown is broadcast first, in which case the
    /// current step is dropped and no further step starts.
    ///
    /// # Errors
    ///
    /// Returns an error when a step cannot be built or its results cannot be delivered.
    pub async fn run_until_shutdown(
        &self,
        plan: &ScenarioPlan,
        shutdown_rx: &mut ShutdownReceiver,
    ) -> AppResult<RunOutcome> {
        tokio::select! {
            result = self.run(plan) => result.map(|issued| RunOutcome::Completed { issued }),
            () = wait_for_shutdown(shutdown_rx) => {
                warn!("Interrupted; remaining steps skipped and in-flight requests abandoned");
                Ok(RunOutcome::Interrupted)
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error when the step cannot be built or its results cannot be delivered.
    pub async fn run_step(&self, step: ScenarioStep) -> AppResult<usize> {
        info!("Starting {} (n = {})", step.kind, step.count);
        let issued = match step.kind {
            ScenarioKind::UpdateWords => self.update_words(step.count).await?,
            ScenarioKind::GetWords => self.get_words(step.count).await?,
            ScenarioKind::Leaderboard => self.leaderboard(step.count).await?,
            ScenarioKind::Dashboard => self.dashboard(step.count).await?,
        };
        self.driver.sink().step_finished(step.kind.as_str()).await?;
        info!("Finished {}: {} requests", step.kind, issued);
        Ok(issued)
    }

    /// One PUT per update_word template for every user index in `1..count`, all in parallel.
    ///
    /// # Errors
    ///
    /// Returns an error when `count` exceeds the user list or a URL cannot be formed.
    pub async fn update_words(&self, count: usize) -> AppResult<usize> {
        let specs = word_requests(
            self.catalog,
            &self.catalog.endpoints.update_word,
            count,
            self.base_url,
            HttpMethod::Put,
        )?;
        self.driver.dispatch(specs).await
    }

    /// One GET per get_words template for every user index in `1..count`, all in parallel.
    ///
    /// # Errors
    ///
    /// Returns an error when `count` exceeds the user list or a URL cannot be formed.
    pub async fn get_words(&self, count: usize) -> AppResult<usize> {
        let specs = word_requests(
            self.catalog,
            &self.catalog.endpoints.get_words,
            count,
            self.base_url,
            HttpMethod::Get,
        )?;
        self.driver.dispatch(specs).await
    }

    /// # Errors
    ///
    /// Returns an error when a URL cannot be formed or results cannot be delivered.
    pub async fn leaderboard(&self, count: usize) -> AppResult<usize> {
        self.fan_out_group(&self.catalog.endpoints.leaderboard, count).await
    }

    /// Fans out to each dashboard endpoint in turn.
    ///
    /// # Errors
    ///
    /// Returns an error when a URL cannot be formed or results cannot be delivered.
    pub async fn dashboard(&self, count: usize) -> AppResult<usize> {
        self.fan_out_group(&self.catalog.endpoints.dashboard, count).await
    }

    async fn fan_out_group(
        &self,
        templates: &[EndpointTemplate],
        count: usize,
    ) -> AppResult<usize> {
        let mut issued: usize = 0;
        for template in templates {
            let spec =
                template.resolve(self.base_url, &TemplateParams::default(), HttpMethod::Get)?;
            let sent = self.driver.fan_out(count, spec.method, &spec.url).await?;
            issued = issued.saturating_add(sent);
        }
        Ok(issued)
    }
}

/// Expands `templates` over user indices `1..count`, substituting the user name
/// for `*` and the index for `#`.
///
/// # Errors
///
/// Returns an error when `count` exceeds the user list or a URL cannot be formed.
pub fn word_requests(
    catalog: &Catalog,
    templates: &[EndpointTemplate],
    count: usize,
    base_url: &Url,
    method: HttpMethod,
) -> AppResult<Vec<RequestSpec>> {
    let available = catalog.users.len();
    if count > available {
        return Err(AppError::validation(ValidationError::NotEnoughUsers {
            requested: count,
            available,
        }));
    }

    let mut specs = Vec::with_capacity(count.saturating_sub(1).saturating_mul(templates.len()));
    for (index, user) in catalog.users.iter().enumerate().take(count).skip(1) {
        let params = TemplateParams::user(user, index);
        for template in templates {
            specs.push(template.resolve(base_url, &params, method)?);
        }
    }
    Ok(specs)
}
