//! Cron-based scheduler for the daily report and its posts

use chrono::Utc;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::core::runtime::{previous_day, Report, ReportRuntime};
use crate::error::{AppError, Result};
use crate::posts::{best_tickers_post, format_post, PostOptions};
use crate::services::posting::SocialPoster;

/// Post the best-tickers line, then one post per top buy and top sell.
///
/// Returns how many posts were delivered. Failed posts are logged and skipped.
pub async fn publish_report(
    report: &Report,
    poster: &dyn SocialPoster,
    options: &PostOptions,
) -> usize {
    let mut texts = Vec::new();
    let best = report.best();
    if !best.is_empty() {
        texts.push(best_tickers_post(best.iter().copied()));
    }
    for result in best.iter().chain(report.worst().iter()) {
        texts.push(format_post(&result.snapshot(), options));
    }

    let mut delivered = 0;
    for text in &texts {
        match poster.post(text).await {
            Ok(()) => delivered += 1,
            Err(e) => warn!(error = %e, "Failed to publish post"),
        }
    }
    delivered
}

pub struct ReportScheduler {
    runtime: Arc<ReportRuntime>,
    poster: Arc<dyn SocialPoster>,
    options: PostOptions,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ReportScheduler {
    /// `cron_expr` uses the six-field form with seconds first.
    pub fn new(
        runtime: Arc<ReportRuntime>,
        poster: Arc<dyn SocialPoster>,
        cron_expr: &str,
    ) -> Result<Self> {
        let schedule = Schedule::from_str(cron_expr).map_err(|e| {
            AppError::Config(format!("Invalid cron expression '{}': {}", cron_expr, e))
        })?;

        info!(cron = %cron_expr, "ReportScheduler: created");

        Ok(Self {
            runtime,
            poster,
            options: PostOptions::default(),
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub fn with_options(mut self, options: PostOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Run the report for the previous day and publish it.
    pub async fn run_once(&self) -> Result<usize> {
        run_and_publish(&self.runtime, self.poster.as_ref(), &self.options).await
    }

    pub async fn start(&self) {
        let runtime = self.runtime.clone();
        let poster = self.poster.clone();
        let options = self.options.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ReportScheduler: started, waiting for cron schedule...");

            loop {
                let mut upcoming = schedule.upcoming(Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                info!("ReportScheduler: cron tick");
                match run_and_publish(&runtime, poster.as_ref(), &options).await {
                    Ok(delivered) => info!(posts = delivered, "ReportScheduler: report published"),
                    Err(e) => error!(error = %e, "ReportScheduler: report run failed"),
                }
            }
        });

        *self.handle.write().await = Some(handle);
        info!("ReportScheduler: started successfully");
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ReportScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}

async fn run_and_publish(
    runtime: &ReportRuntime,
    poster: &dyn SocialPoster,
    options: &PostOptions,
) -> Result<usize> {
    let report = runtime.run(previous_day(Utc::now())).await?;
    Ok(publish_report(&report, poster, options).await)
}
