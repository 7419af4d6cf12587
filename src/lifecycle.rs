//! Cluster readiness polling.
//!
//! Drives a cluster toward started or stopped and optionally waits for the
//! remote system to report the terminal state. The remote side is
//! authoritative; this module only issues at most one request and then
//! re-reads state at a fixed interval.

use crate::client::WorkspaceClient;
use crate::config::PollConfig;
use crate::error::ApiError;
use crate::model::{Cluster, ClusterState};
use crate::progress::{LifecycleAction, LifecycleObserver};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Whether and how long to wait for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub wait: bool,
    pub interval: Duration,
    /// `None` waits until a terminal state is observed.
    pub timeout: Option<Duration>,
}

impl WaitPolicy {
    /// Fire the request and return immediately.
    pub fn no_wait() -> Self {
        Self {
            wait: false,
            interval: Duration::from_secs(1),
            timeout: None,
        }
    }

    /// Policy from configuration; `timeout_secs` overrides the configured bound (0 = unbounded).
    pub fn from_config(wait: bool, poll: &PollConfig, timeout_secs: Option<u64>) -> Self {
        let timeout = match timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => poll.timeout(),
        };
        Self {
            wait,
            interval: poll.interval(),
            timeout,
        }
    }
}

/// What a start or stop call did.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleOutcome {
    /// Last observed snapshot (the input snapshot when not waiting).
    pub cluster: Cluster,
    /// Whether a start/terminate request was sent.
    pub request_sent: bool,
    /// Number of state re-reads performed while waiting.
    pub polls: u32,
}

/// Start `cluster` unless it is already RUNNING or PENDING.
///
/// When waiting, succeeds once RUNNING is observed and fails with
/// [`ApiError::ClusterStartFailed`] if TERMINATED is observed instead.
pub async fn start_cluster(
    client: &dyn WorkspaceClient,
    cluster: Cluster,
    policy: &WaitPolicy,
    observer: &dyn LifecycleObserver,
) -> Result<LifecycleOutcome, ApiError> {
    let needs_request = !matches!(
        cluster.state,
        ClusterState::Running | ClusterState::Pending
    );
    if needs_request {
        info!(cluster_id = %cluster.id, state = %cluster.state, "starting cluster");
        observer.request_sent(LifecycleAction::Start, &cluster);
        client.start_cluster(&cluster.id).await?;
    } else {
        debug!(cluster_id = %cluster.id, state = %cluster.state, "cluster already starting or running");
    }

    if !policy.wait {
        return Ok(LifecycleOutcome {
            cluster,
            request_sent: needs_request,
            polls: 0,
        });
    }

    let (cluster, polls) = poll_until(
        client,
        &cluster.id,
        policy,
        observer,
        ClusterState::Running,
        Some(ClusterState::Terminated),
    )
    .await?;
    Ok(LifecycleOutcome {
        cluster,
        request_sent: needs_request,
        polls,
    })
}

/// Terminate `cluster` unless it is already TERMINATED.
///
/// When waiting, succeeds once TERMINATED is observed; there is no failure state.
pub async fn stop_cluster(
    client: &dyn WorkspaceClient,
    cluster: Cluster,
    policy: &WaitPolicy,
    observer: &dyn LifecycleObserver,
) -> Result<LifecycleOutcome, ApiError> {
    let needs_request = cluster.state != ClusterState::Terminated;
    if needs_request {
        info!(cluster_id = %cluster.id, state = %cluster.state, "terminating cluster");
        observer.request_sent(LifecycleAction::Terminate, &cluster);
        client.terminate_cluster(&cluster.id).await?;
    } else {
        debug!(cluster_id = %cluster.id, "cluster already terminated");
    }

    if !policy.wait {
        return Ok(LifecycleOutcome {
            cluster,
            request_sent: needs_request,
            polls: 0,
        });
    }

    let (cluster, polls) = poll_until(
        client,
        &cluster.id,
        policy,
        observer,
        ClusterState::Terminated,
        None,
    )
    .await?;
    Ok(LifecycleOutcome {
        cluster,
        request_sent: needs_request,
        polls,
    })
}

/// Sleep, re-read, report; until `target`, `failure`, or the policy timeout.
async fn poll_until(
    client: &dyn WorkspaceClient,
    cluster_id: &str,
    policy: &WaitPolicy,
    observer: &dyn LifecycleObserver,
    target: ClusterState,
    failure: Option<ClusterState>,
) -> Result<(Cluster, u32), ApiError> {
    let started = Instant::now();
    let mut polls = 0u32;
    loop {
        sleep(policy.interval).await;

        let cluster = client.load_cluster(cluster_id).await?;
        polls += 1;
        observer.state_observed(&cluster);
        debug!(cluster_id, state = %cluster.state, polls, "polled cluster state");

        if cluster.state == target {
            info!(cluster_id, state = %cluster.state, polls, "cluster reached target state");
            return Ok((cluster, polls));
        }
        if failure.as_ref() == Some(&cluster.state) {
            warn!(cluster_id, state = %cluster.state, "cluster failed to reach target state");
            return Err(ApiError::ClusterStartFailed {
                cluster_id: cluster_id.to_string(),
            });
        }
        if let Some(limit) = policy.timeout {
            let waited = started.elapsed();
            if waited >= limit {
                warn!(cluster_id, state = %cluster.state, waited_ms = waited.as_millis() as u64, "gave up waiting");
                return Err(ApiError::WaitTimeout {
                    cluster_id: cluster_id.to_string(),
                    target: target.to_string(),
                    waited_secs: waited.as_secs(),
                });
            }
        }
    }
}
