use tokio_cron_scheduler::{Job, JobScheduler};

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::announce::Announcer;
use crate::error::BotResult;

pub struct Scheduler {
    scheduler: JobScheduler,
    announcer: Arc<Announcer>,
}

pub enum JobProcess<'schedule> {
    AnnounceDailyChallenge(&'schedule str),
}

impl Scheduler {
    pub async fn new(announcer: Arc<Announcer>) -> BotResult<Self> {
        let scheduler = JobScheduler::new().await?;
        Ok(Scheduler {
            scheduler,
            announcer,
        })
    }

    pub async fn add_job(&self, job_process: JobProcess<'_>) -> BotResult<uuid::Uuid> {
        let job = match job_process {
            JobProcess::AnnounceDailyChallenge(schedule) => {
                announce_daily_challenge_job(schedule, self.announcer.clone())?
            }
        };
        Ok(self.scheduler.add(job).await?)
    }

    pub async fn start(&self) -> BotResult<()> {
        Ok(self.scheduler.start().await?)
    }
}

//////////////////
// Jobs definition
//////////////////

// Cron expressions are evaluated in UTC, which is also the day the
// announcement is built for.
fn announce_daily_challenge_job(schedule: &str, announcer: Arc<Announcer>) -> BotResult<Job> {
    let job = Job::new_async(schedule, move |uuid, mut l| {
        let announcer = announcer.clone();
        Box::pin(async move {
            // failures are already logged by the announcer, and never retried
            let _ = announcer.announce(Utc::now()).await;

            // Query the next execution time for this job
            let next_tick = l.next_tick_for_job(uuid).await;
            match next_tick {
                Ok(Some(ts)) => info!("Next daily challenge announcement at {:?}", ts),
                _ => error!("Could not get next tick for daily challenge announcement job"),
            }
        })
    })?;
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::settings;

    #[tokio::test]
    async fn announcement_job_accepts_the_default_schedule() {
        let settings = settings();
        let announcer = Arc::new(Announcer::new(&settings).unwrap());
        let scheduler = Scheduler::new(announcer).await.unwrap();

        let added = scheduler
            .add_job(JobProcess::AnnounceDailyChallenge(&settings.announce_schedule))
            .await;

        assert!(added.is_ok());
    }

    #[tokio::test]
    async fn invalid_schedule_is_a_scheduler_error() {
        let settings = settings();
        let announcer = Arc::new(Announcer::new(&settings).unwrap());
        let scheduler = Scheduler::new(announcer).await.unwrap();

        let added = scheduler
            .add_job(JobProcess::AnnounceDailyChallenge("every morning"))
            .await;

        assert!(matches!(added, Err(crate::error::BotError::Scheduler(_))));
    }
}
