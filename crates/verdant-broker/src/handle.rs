use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, oneshot, watch};

use verdant_engines::ProjectInput;

use crate::broker::EstimateOutcome;

#[derive(Debug)]
pub enum BrokerRequest {
    Submit {
        input: ProjectInput,
        reply: oneshot::Sender<EstimateOutcome>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Cloneable consumer-side handle to the broker service loop.
///
/// `submit` resolves to a fully populated outcome or an error meaning the
/// submission was superseded by a newer one (or the service is gone) - never
/// to a partial result. The watch channel mirrors the Requesting state for
/// loading indicators.
#[derive(Clone, Debug)]
pub struct BrokerHandle {
    tx: mpsc::UnboundedSender<BrokerRequest>,
    requesting: watch::Receiver<bool>,
}

impl BrokerHandle {
    pub fn new(tx: mpsc::UnboundedSender<BrokerRequest>, requesting: watch::Receiver<bool>) -> Self {
        Self { tx, requesting }
    }

    pub async fn submit(&self, input: ProjectInput) -> Result<EstimateOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BrokerRequest::Submit {
                input,
                reply: reply_tx,
            })
            .map_err(|_| anyhow!("broker request channel closed"))?;
        reply_rx
            .await
            .map_err(|_| anyhow!("submission superseded or broker gone"))
    }

    /// True while an estimation is in flight.
    pub fn is_estimating(&self) -> bool {
        *self.requesting.borrow()
    }

    /// Watch half of the Requesting state, for callers that want to await
    /// transitions instead of polling.
    pub fn requesting(&self) -> watch::Receiver<bool> {
        self.requesting.clone()
    }

    pub async fn shutdown(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BrokerRequest::Shutdown { reply: reply_tx })
            .map_err(|_| anyhow!("broker request channel closed"))?;
        reply_rx
            .await
            .map_err(|_| anyhow!("broker reply channel closed"))
    }
}
