use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;
use tokio::time::{Duration, sleep};

use super::flow::TransactionRequest;

/// Delay observed in the original settlement animation.
pub const DEFAULT_SETTLEMENT_DELAY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReceipt {
    pub confirmation_id: String,
    pub settled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("settlement rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait SettlementGateway: Send + Sync {
    async fn settle(
        &self,
        request: &TransactionRequest,
    ) -> Result<SettlementReceipt, SettlementError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulatedOutcome {
    Confirm,
    Reject(String),
}

/// Stand-in for a payment gateway: waits a configurable delay, then
/// returns a fabricated confirmation id (or a scripted rejection).
/// The receipt is display-only and reconcilable with nothing.
pub struct SimulatedSettlementGateway {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedSettlementGateway {
    pub fn new() -> Self {
        Self::scripted(DEFAULT_SETTLEMENT_DELAY, SimulatedOutcome::Confirm)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self::scripted(delay, SimulatedOutcome::Confirm)
    }

    pub fn scripted(delay: Duration, outcome: SimulatedOutcome) -> Self {
        Self { delay, outcome }
    }
}

impl Default for SimulatedSettlementGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettlementGateway for SimulatedSettlementGateway {
    async fn settle(
        &self,
        request: &TransactionRequest,
    ) -> Result<SettlementReceipt, SettlementError> {
        sleep(self.delay).await;

        match &self.outcome {
            SimulatedOutcome::Confirm => {
                let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
                let receipt = SettlementReceipt {
                    confirmation_id: format!("VDX-{suffix:06}"),
                    settled_at: Utc::now(),
                };
                log::info!(
                    "settled {} x{} for record {}: {}",
                    request.action.label(),
                    request.quantity,
                    request.record_id,
                    receipt.confirmation_id
                );
                Ok(receipt)
            }
            SimulatedOutcome::Reject(reason) => {
                log::warn!(
                    "settlement for record {} rejected: {}",
                    request.record_id,
                    reason
                );
                Err(SettlementError::Rejected(reason.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::flow::TradeAction;

    fn request() -> TransactionRequest {
        TransactionRequest {
            record_id: "VCX-001".to_string(),
            project_name: "Amazon Rainforest Conservation".to_string(),
            action: TradeAction::Buy,
            quantity: 5,
            unit_price: 18.50,
        }
    }

    #[tokio::test]
    async fn confirm_outcome_yields_a_prefixed_receipt() {
        let gateway =
            SimulatedSettlementGateway::scripted(Duration::ZERO, SimulatedOutcome::Confirm);
        let receipt = gateway.settle(&request()).await.unwrap();
        assert!(receipt.confirmation_id.starts_with("VDX-"));
        assert_eq!(receipt.confirmation_id.len(), 10);
    }

    #[tokio::test]
    async fn scripted_rejection_surfaces_the_reason() {
        let gateway = SimulatedSettlementGateway::scripted(
            Duration::ZERO,
            SimulatedOutcome::Reject("card declined".to_string()),
        );
        let err = gateway.settle(&request()).await.unwrap_err();
        assert_eq!(err, SettlementError::Rejected("card declined".to_string()));
    }
}
