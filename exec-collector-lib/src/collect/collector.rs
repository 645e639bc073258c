use super::{CollectedValue, MetricId, Namespace};
use crate::convert::convert;
use crate::error::CollectError;
use crate::runner::{CommandRunner, ProcessRunner};
use crate::setfile::MetricSet;
use crate::settings::{ConfigPolicy, ConfigTable};
use chrono::Utc;
use core::time::Duration;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Instant;
use tokio::task::JoinSet;

const LOG_TARGET: &str = " collector";

/// Collects metrics by running the programs a setfile declares.
///
/// The setfile is loaded again on every call; the most recently loaded set is
/// kept and available through [`Collector::metrics`].
pub struct Collector {
    namespace: Namespace,
    runner: Arc<dyn CommandRunner>,
    policy: ConfigPolicy,
    metrics: RwLock<Arc<MetricSet>>,
}

impl core::fmt::Debug for Collector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Collector")
            .field("namespace", &self.namespace)
            .field("runner", &"<dyn CommandRunner>")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Collector {
    pub fn new(namespace: Namespace, runner: impl CommandRunner + 'static) -> Self {
        Self {
            namespace,
            runner: Arc::new(runner),
            policy: ConfigPolicy::default(),
            metrics: RwLock::new(Arc::new(MetricSet::default())),
        }
    }

    /// A collector that runs real child processes.
    #[must_use]
    pub fn with_process_runner(namespace: Namespace) -> Self {
        Self::new(namespace, ProcessRunner::new())
    }

    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The set loaded by the last successful call.
    #[must_use]
    pub fn metrics(&self) -> Arc<MetricSet> {
        Arc::clone(&self.metrics.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Load the setfile and replace the current set with it.
    fn reload(&self, setfile: &Path) -> Result<Arc<MetricSet>, CollectError> {
        let set = MetricSet::load(setfile).map(Arc::new).inspect_err(|e| {
            log::error!(target: LOG_TARGET, "{e} (kind={}, setfile={})", e.kind(), setfile.display());
        })?;

        *self.metrics.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&set);
        Ok(set)
    }

    /// List the identifiers of every metric the setfile declares, ordered by name.
    pub fn metric_types(&self, setfile: &Path) -> Result<Vec<MetricId>, CollectError> {
        let set = self.reload(setfile)?;
        Ok(set.names().map(|name| self.namespace.metric_id(name)).collect())
    }

    /// Collect the requested metrics, resolving the setfile and timeout from `config`.
    pub async fn collect_with_config(
        &self,
        requested: Vec<MetricId>,
        config: &ConfigTable,
    ) -> Result<Vec<CollectedValue>, CollectError> {
        if requested.is_empty() {
            return Err(CollectError::EmptyRequest);
        }

        let settings = self.policy.resolve(config).inspect_err(|e| {
            log::error!(target: LOG_TARGET, "{e} (kind={})", e.kind());
        })?;

        self.collect(requested, &settings.setfile, settings.execution_timeout).await
    }

    /// Collect the requested metrics concurrently.
    ///
    /// Each identifier is handled by its own task. A metric whose identifier,
    /// execution, or conversion fails is logged and left out of the result; only
    /// an empty request or an unloadable setfile fails the call. Results are in
    /// no particular order.
    ///
    /// `timeout` is advisory: a program running longer only produces a warning.
    pub async fn collect(
        &self,
        requested: impl IntoIterator<Item = MetricId>,
        setfile: &Path,
        timeout: Duration,
    ) -> Result<Vec<CollectedValue>, CollectError> {
        let requested: Vec<_> = requested.into_iter().collect();
        if requested.is_empty() {
            return Err(CollectError::EmptyRequest);
        }

        let metrics = self.reload(setfile)?;
        let start_time = Instant::now();
        let requested_count = requested.len();

        log::info!(target: LOG_TARGET, "Collecting {requested_count} metric(s) from setfile '{}'", setfile.display());

        let results = Arc::new(Mutex::new(Vec::with_capacity(requested_count)));
        let mut tasks = JoinSet::new();

        for id in requested {
            let unit = Unit {
                namespace: self.namespace.clone(),
                metrics: Arc::clone(&metrics),
                runner: Arc::clone(&self.runner),
                timeout,
            };
            let results = Arc::clone(&results);

            let _ = tasks.spawn(async move {
                match unit.collect(&id).await {
                    Ok(value) => results.lock().unwrap_or_else(PoisonError::into_inner).push(value),
                    Err(e) => log::warn!(target: LOG_TARGET, "{e} (kind={}, namespace={id})", e.kind()),
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                log::error!(target: LOG_TARGET, "Collection task did not complete: {e}");
            }
        }

        let values = core::mem::take(&mut *results.lock().unwrap_or_else(PoisonError::into_inner));

        log::info!(
            target: LOG_TARGET,
            "Collected {} of {requested_count} metric(s) in {:.3}s",
            values.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(values)
    }
}

/// Everything one task needs to collect a single metric.
struct Unit {
    namespace: Namespace,
    metrics: Arc<MetricSet>,
    runner: Arc<dyn CommandRunner>,
    timeout: Duration,
}

impl Unit {
    async fn collect(&self, id: &MetricId) -> Result<CollectedValue, CollectError> {
        let name = self.namespace.metric_name(id)?;

        let descriptor = self.metrics.get(name).ok_or_else(|| CollectError::UnknownMetric {
            identifier: id.to_string(),
            name: name.to_string(),
        })?;

        let start_time = Instant::now();
        let output = self.runner.run(&descriptor.executable, &descriptor.arguments).await?;
        let elapsed = start_time.elapsed();

        if elapsed > self.timeout {
            log::warn!(
                target: LOG_TARGET,
                "Waiting for output of '{id}' took {:.3}s, more than {} seconds",
                elapsed.as_secs_f64(),
                self.timeout.as_secs()
            );
        }

        let value = convert(&output, &descriptor.value_type)?;
        log::debug!(target: LOG_TARGET, "Collected '{id}' = {value:?}");

        Ok(CollectedValue {
            id: id.clone(),
            value,
            timestamp: Utc::now(),
        })
    }
}
