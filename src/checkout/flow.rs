use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{Notify, RwLock};

use super::gateway::{SettlementGateway, SettlementReceipt};
use crate::catalog::CarbonCreditRecord;

/// Marketplace fee charged on top of the subtotal.
pub const FEE_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Retire,
}

impl TradeAction {
    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Retire => "retire",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub record_id: String,
    pub project_name: String,
    pub action: TradeAction,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Order totals, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub fee: f64,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn for_order(quantity: u32, unit_price: f64) -> Self {
        let subtotal = round_cents(quantity as f64 * unit_price);
        let fee = round_cents(subtotal * FEE_RATE);
        let total = round_cents(subtotal + fee);
        Self {
            subtotal,
            fee,
            total,
        }
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutState {
    Review,
    Processing,
    Success { receipt: SettlementReceipt },
    Failed { reason: String },
    Closed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("requested {requested} units but only {available} are available")]
    ExceedsAvailable { requested: u32, available: u32 },
    #[error("confirm is only valid from the review step")]
    NotInReview,
}

/// Linear confirmation flow for a simulated purchase or retirement:
/// `Review -> Processing -> Success | Failed`, with `Closed` reachable
/// from any state via cancel. Nothing here persists; the catalog record
/// is never decremented.
pub struct CheckoutFlow {
    request: TransactionRequest,
    breakdown: PriceBreakdown,
    state: Arc<RwLock<CheckoutState>>,
    cancelled: Arc<Notify>,
    gateway: Arc<dyn SettlementGateway>,
}

impl CheckoutFlow {
    /// Opens the review step. Quantity is validated here, both against
    /// the floor of 1 and against the record's available ceiling.
    pub fn begin(
        record: &CarbonCreditRecord,
        action: TradeAction,
        quantity: u32,
        gateway: Arc<dyn SettlementGateway>,
    ) -> Result<Self, CheckoutError> {
        if quantity < 1 {
            return Err(CheckoutError::InvalidQuantity);
        }
        if quantity > record.available_quantity {
            return Err(CheckoutError::ExceedsAvailable {
                requested: quantity,
                available: record.available_quantity,
            });
        }

        let request = TransactionRequest {
            record_id: record.id.clone(),
            project_name: record.project_name.clone(),
            action,
            quantity,
            unit_price: record.price_per_unit,
        };
        let breakdown = PriceBreakdown::for_order(quantity, record.price_per_unit);

        Ok(Self {
            request,
            breakdown,
            state: Arc::new(RwLock::new(CheckoutState::Review)),
            cancelled: Arc::new(Notify::new()),
            gateway,
        })
    }

    pub fn request(&self) -> &TransactionRequest {
        &self.request
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.breakdown
    }

    pub async fn state(&self) -> CheckoutState {
        self.state.read().await.clone()
    }

    /// `Review -> Processing`, then waits on the settlement gateway.
    /// Returns the state the flow landed in. A cancel that arrives
    /// while the gateway is in flight wins: the flow stays `Closed`
    /// and the late settlement result is dropped.
    pub async fn confirm(&self) -> Result<CheckoutState, CheckoutError> {
        {
            let mut state = self.state.write().await;
            if *state != CheckoutState::Review {
                return Err(CheckoutError::NotInReview);
            }
            *state = CheckoutState::Processing;
        }
        log::debug!(
            "processing {} x{} of {}",
            self.request.action.label(),
            self.request.quantity,
            self.request.record_id
        );

        tokio::select! {
            result = self.gateway.settle(&self.request) => {
                let mut state = self.state.write().await;
                if *state != CheckoutState::Processing {
                    // the view was torn down mid-settlement; never
                    // overwrite Closed with a late result
                    return Ok(state.clone());
                }
                *state = match result {
                    Ok(receipt) => CheckoutState::Success { receipt },
                    Err(e) => CheckoutState::Failed { reason: e.to_string() },
                };
                Ok(state.clone())
            }
            _ = self.cancelled.notified() => {
                Ok(self.state.read().await.clone())
            }
        }
    }

    /// Moves any state to `Closed` and wakes an in-flight confirm.
    pub async fn cancel(&self) {
        {
            let mut state = self.state.write().await;
            *state = CheckoutState::Closed;
        }
        self.cancelled.notify_waiters();
    }

    /// User dismissal of the terminal screen.
    pub async fn dismiss(&self) {
        let mut state = self.state.write().await;
        if matches!(
            *state,
            CheckoutState::Success { .. } | CheckoutState::Failed { .. }
        ) {
            *state = CheckoutState::Closed;
        }
    }
}
