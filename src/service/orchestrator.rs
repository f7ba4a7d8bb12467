//! The status request orchestrator.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cache::{StatusCache, employee_key};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustedSalary, StatusReport};
use crate::retry::{self, RetryOptions};
use crate::rules;
use crate::store::RecordStore;
use crate::validation;

/// Orchestrates one status request end to end.
///
/// The request flow is fixed: key validation, cache lookup (a hit
/// short-circuits everything that follows), record fetch through the retry
/// executor, activity and history checks, salary-shape validation, rule
/// evaluation, best-effort cache population.
///
/// The service is stateless per request; shared behind an `Arc` it serves
/// concurrent requests independently.
pub struct StatusService {
    store: Arc<dyn RecordStore>,
    cache: StatusCache,
    retry: RetryOptions,
}

impl StatusService {
    /// Creates a service from its collaborators.
    pub fn new(store: Arc<dyn RecordStore>, cache: StatusCache, retry: RetryOptions) -> Self {
        Self {
            store,
            cache,
            retry,
        }
    }

    /// Creates a service wired from loaded configuration.
    pub fn from_config(store: Arc<dyn RecordStore>, loader: &ConfigLoader) -> Self {
        Self::new(
            store,
            StatusCache::connect(loader.cache()),
            loader.retry().to_options(),
        )
    }

    /// Returns the cache layer.
    pub fn cache(&self) -> &StatusCache {
        &self.cache
    }

    /// Computes the compensation status for the employee identified by
    /// `national_key`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] for a malformed key or malformed
    ///   salary records
    /// - [`EngineError::NotFound`] when no record exists for the key
    /// - [`EngineError::Inactive`] when the record is deactivated
    /// - [`EngineError::InsufficientData`] when the salary history is too
    ///   short
    /// - [`EngineError::DataAccessFailure`] when the record store fails on
    ///   every retry attempt
    pub async fn employee_status(&self, national_key: &str) -> EngineResult<StatusReport> {
        if !validation::validate_key_format(national_key) {
            warn!(national_key, "Rejected malformed national key");
            return Err(EngineError::InvalidInput {
                message: format!(
                    "national key '{}' must be 3 letters followed by 4 digits",
                    national_key.trim()
                ),
            });
        }
        let key = national_key.trim().to_ascii_uppercase();

        if let Some(report) = self.cached_report(&key) {
            return Ok(report);
        }

        let result = self.fetch_and_compute(&key).await;
        if let Err(ref error) = result {
            warn!(national_key = %key, error = %error, "Status request failed");
        }
        result
    }

    /// Evicts the cached report for one employee, returning true if an
    /// entry was present.
    pub fn invalidate(&self, national_key: &str) -> bool {
        let key = national_key.trim().to_ascii_uppercase();
        self.cache.delete(&employee_key(&key))
    }

    /// Evicts every cached employee report, returning the number removed.
    pub fn invalidate_all(&self) -> usize {
        self.cache.delete_by_prefix(crate::cache::EMPLOYEE_KEY_PREFIX)
    }

    /// Returns the cached report for a canonical key, if any.
    ///
    /// A payload that no longer deserializes is evicted and treated as a
    /// miss.
    fn cached_report(&self, key: &str) -> Option<StatusReport> {
        let cache_key = employee_key(key);
        let payload = match self.cache.get(&cache_key) {
            Some(payload) => payload,
            None => {
                debug!(national_key = %key, "Cache miss");
                return None;
            }
        };

        match serde_json::from_str::<StatusReport>(&payload) {
            Ok(report) => {
                info!(national_key = %key, "Cache hit");
                Some(report)
            }
            Err(error) => {
                warn!(national_key = %key, error = %error, "Evicting undecodable cache entry");
                self.cache.delete(&cache_key);
                None
            }
        }
    }

    /// Runs the post-cache stages of the request flow for a canonical key.
    async fn fetch_and_compute(&self, key: &str) -> EngineResult<StatusReport> {
        let record = retry::execute(
            || self.store.find_by_key(key),
            &self.retry,
            |attempt, error: &EngineError| {
                warn!(national_key = %key, attempt, error = %error, "Record fetch failed, retrying");
            },
        )
        .await?;
        if record.retried() {
            info!(
                national_key = %key,
                attempts = record.attempts,
                "Record fetch succeeded after retries"
            );
        }
        let record = record.value.ok_or_else(|| EngineError::NotFound {
            national_key: key.to_string(),
        })?;

        if !validation::is_active(record.is_active) {
            return Err(EngineError::Inactive {
                national_key: key.to_string(),
            });
        }

        let salaries = retry::execute(
            || self.store.list_salaries(&record.id),
            &self.retry,
            |attempt, error: &EngineError| {
                warn!(employee_id = %record.id, attempt, error = %error, "Salary fetch failed, retrying");
            },
        )
        .await?
        .value;

        if !validation::has_minimum_history(salaries.len()) {
            return Err(EngineError::InsufficientData {
                found: salaries.len(),
                required: validation::MINIMUM_SALARY_HISTORY,
            });
        }

        validation::validate_salary_shape(&salaries)?;

        let computation = rules::evaluate(&salaries);
        let report = StatusReport {
            national_key: record.national_key.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            salaries: computation.adjusted.iter().map(AdjustedSalary::from).collect(),
            total_salary: computation.total,
            average_salary: computation.average,
            highest_salary: computation.highest,
            tax_amount: computation.tax,
            status: computation.status,
            last_updated: Utc::now(),
        };
        info!(
            national_key = %key,
            status = %report.status,
            average = %report.average_salary,
            "Status computed"
        );

        // Fire-and-forget relative to the response: a cache problem never
        // fails the computed result.
        match serde_json::to_string(&report) {
            Ok(payload) => self.cache.set(&employee_key(key), payload, None),
            Err(error) => {
                debug!(national_key = %key, error = %error, "Skipping cache of unserializable report");
            }
        }

        Ok(report)
    }
}
