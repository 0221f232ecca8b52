use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::broker::Broker;
use crate::handle::{BrokerHandle, BrokerRequest};

/// Spawns the service loop and returns the consumer handle.
pub fn spawn(broker: Broker) -> BrokerHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let (requesting_tx, requesting_rx) = watch::channel(false);
    tokio::spawn(run(rx, broker, requesting_tx));
    BrokerHandle::new(tx, requesting_rx)
}

/// Service loop with last-submission-wins semantics.
///
/// At most one estimate is in flight. A `Submit` that arrives while one is
/// pending aborts the pending task (dropping the in-flight request future
/// cancels the HTTP call best-effort) and drops its reply sender, so a
/// superseded submission can never deliver a result after a newer one.
pub async fn run(
    mut rx: mpsc::UnboundedReceiver<BrokerRequest>,
    broker: Broker,
    requesting: watch::Sender<bool>,
) {
    tracing::info!(target: "verdant_broker", "service loop started");
    let broker = Arc::new(broker);

    'outer: while let Some(req) = rx.recv().await {
        match req {
            BrokerRequest::Shutdown { reply } => {
                tracing::info!(target: "verdant_broker", "Shutdown - exiting service loop");
                let _ = reply.send(());
                break;
            }
            BrokerRequest::Submit {
                mut input,
                mut reply,
            } => {
                let _ = requesting.send(true);
                loop {
                    tracing::info!(
                        target: "verdant_broker",
                        project_type = %input.project_type,
                        size = %input.size,
                        "Submit"
                    );
                    let estimator = Arc::clone(&broker);
                    let current = input;
                    let mut task =
                        tokio::spawn(async move { estimator.estimate(&current).await });

                    tokio::select! {
                        joined = &mut task => {
                            let _ = requesting.send(false);
                            match joined {
                                Ok(outcome) => {
                                    let _ = reply.send(outcome);
                                }
                                Err(error) => {
                                    tracing::warn!(
                                        target: "verdant_broker",
                                        error = %error,
                                        "estimate task failed"
                                    );
                                }
                            }
                            break;
                        }
                        maybe_req = rx.recv() => match maybe_req {
                            Some(BrokerRequest::Submit { input: newer, reply: newer_reply }) => {
                                tracing::info!(
                                    target: "verdant_broker",
                                    "newer submission supersedes in-flight estimate"
                                );
                                task.abort();
                                // Dropping the old reply sender is how the
                                // superseded caller learns it lost the race.
                                input = newer;
                                reply = newer_reply;
                            }
                            Some(BrokerRequest::Shutdown { reply: shutdown_reply }) => {
                                tracing::info!(
                                    target: "verdant_broker",
                                    "Shutdown - aborting in-flight estimate"
                                );
                                task.abort();
                                let _ = requesting.send(false);
                                let _ = shutdown_reply.send(());
                                break 'outer;
                            }
                            None => {
                                task.abort();
                                break 'outer;
                            }
                        }
                    }
                }
            }
        }
    }

    let _ = requesting.send(false);
    tracing::info!(target: "verdant_broker", "service loop exited");
}
