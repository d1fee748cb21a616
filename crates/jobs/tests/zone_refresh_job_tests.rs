use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;
use zonestore_dns_application::services::{StoreHealth, StoreStatus};
use zonestore_dns_jobs::ZoneRefreshJob;

mod helpers;
use helpers::MockZoneRepository;

fn make_job(repo: Arc<MockZoneRepository>, health: Arc<StoreHealth>) -> ZoneRefreshJob {
    ZoneRefreshJob::new(repo, health)
        .with_intervals(Duration::from_millis(50), Duration::from_millis(5))
}

#[tokio::test]
async fn test_successful_reload_marks_store_healthy() {
    let repo = Arc::new(MockZoneRepository::new(3));
    let health = Arc::new(StoreHealth::new());
    let job = make_job(repo.clone(), health.clone());

    let delay = job.run_once().await;

    assert_eq!(delay, Duration::from_millis(50));
    assert_eq!(health.status(), StoreStatus::Healthy);
    assert_eq!(repo.reload_count(), 1);
}

#[tokio::test]
async fn test_failed_reload_marks_store_unhealthy() {
    let repo = Arc::new(MockZoneRepository::new(3));
    repo.set_should_fail(true);
    let health = Arc::new(StoreHealth::new());
    let job = make_job(repo.clone(), health.clone());

    let delay = job.run_once().await;
    job.run_once().await;

    assert_eq!(delay, Duration::from_millis(5));
    assert_eq!(health.status(), StoreStatus::Unhealthy);
    assert_eq!(health.consecutive_failures(), 2);
}

#[tokio::test]
async fn test_recovery_resets_failure_count() {
    let repo = Arc::new(MockZoneRepository::new(1));
    let health = Arc::new(StoreHealth::new());
    let job = make_job(repo.clone(), health.clone());

    repo.set_should_fail(true);
    job.run_once().await;
    repo.set_should_fail(false);
    job.run_once().await;

    assert_eq!(health.status(), StoreStatus::Healthy);
    assert_eq!(health.consecutive_failures(), 0);
}

#[tokio::test]
async fn test_failing_store_is_retried_sooner() {
    let healthy_repo = Arc::new(MockZoneRepository::new(1));
    let failing_repo = Arc::new(MockZoneRepository::new(1));
    failing_repo.set_should_fail(true);
    let token = CancellationToken::new();

    let healthy = Arc::new(
        make_job(healthy_repo.clone(), Arc::new(StoreHealth::new()))
            .with_cancellation(token.clone()),
    );
    let failing = Arc::new(
        make_job(failing_repo.clone(), Arc::new(StoreHealth::new()))
            .with_cancellation(token.clone()),
    );
    let h1 = tokio::spawn(healthy.start());
    let h2 = tokio::spawn(failing.start());

    sleep(Duration::from_millis(120)).await;
    token.cancel();
    h1.await.unwrap();
    h2.await.unwrap();

    assert!(healthy_repo.reload_count() >= 1);
    assert!(failing_repo.reload_count() > healthy_repo.reload_count());
}

#[tokio::test]
async fn test_cancellation_stops_job() {
    let repo = Arc::new(MockZoneRepository::new(1));
    let token = CancellationToken::new();
    let job = Arc::new(
        ZoneRefreshJob::new(repo.clone(), Arc::new(StoreHealth::new()))
            .with_cancellation(token.clone()),
    );

    let handle = tokio::spawn(job.start());
    sleep(Duration::from_millis(10)).await;
    token.cancel();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("job should stop after cancellation")
        .unwrap();
    assert_eq!(repo.reload_count(), 1);
}
