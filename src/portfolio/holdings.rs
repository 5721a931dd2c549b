use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkout::{PriceBreakdown, SettlementReceipt, TradeAction, TransactionRequest};

/// One settled (simulated) order. Session-only; nothing is written back
/// to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub record_id: String,
    pub project_name: String,
    pub action: TradeAction,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_paid: f64,
    pub confirmation_id: String,
    pub acquired_at: DateTime<Utc>,
}

impl Holding {
    pub fn from_settlement(
        request: &TransactionRequest,
        breakdown: PriceBreakdown,
        receipt: &SettlementReceipt,
    ) -> Self {
        Self {
            record_id: request.record_id.clone(),
            project_name: request.project_name.clone(),
            action: request.action,
            quantity: request.quantity,
            unit_price: request.unit_price,
            total_paid: breakdown.total,
            confirmation_id: receipt.confirmation_id.clone(),
            acquired_at: receipt.settled_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub holdings: usize,
    pub units_bought: u64,
    pub units_retired: u64,
    pub total_spent: f64,
    pub average_cost_per_unit: f64,
}

#[derive(Debug, Default)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, holding: Holding) {
        log::info!(
            "portfolio: recorded {} x{} of {} ({})",
            holding.action.label(),
            holding.quantity,
            holding.record_id,
            holding.confirmation_id
        );
        self.holdings.push(holding);
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn summary(&self) -> PortfolioSummary {
        let units_bought: u64 = self
            .holdings
            .iter()
            .filter(|h| h.action == TradeAction::Buy)
            .map(|h| h.quantity as u64)
            .sum();
        let units_retired: u64 = self
            .holdings
            .iter()
            .filter(|h| h.action == TradeAction::Retire)
            .map(|h| h.quantity as u64)
            .sum();
        let total_spent: f64 = self.holdings.iter().map(|h| h.total_paid).sum();
        let total_units = units_bought + units_retired;
        // same guarded-divisor rule as the catalog stats
        let average_cost_per_unit = total_spent / total_units.max(1) as f64;

        PortfolioSummary {
            holdings: self.holdings.len(),
            units_bought,
            units_retired,
            total_spent,
            average_cost_per_unit,
        }
    }

    /// Appends holdings to a CSV file, writing the header only when the
    /// file is created.
    pub fn save_to_csv(&self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file_exists = std::path::Path::new(filename).exists();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(filename)?;

        let mut wtr = csv::Writer::from_writer(file);

        if !file_exists {
            wtr.write_record([
                "acquired_at",
                "record_id",
                "project_name",
                "action",
                "quantity",
                "unit_price",
                "total_paid",
                "confirmation_id",
            ])?;
        }

        for holding in &self.holdings {
            wtr.write_record([
                &holding.acquired_at.to_rfc3339(),
                &holding.record_id,
                &holding.project_name,
                &holding.action.label().to_string(),
                &holding.quantity.to_string(),
                &format!("{:.2}", holding.unit_price),
                &format!("{:.2}", holding.total_paid),
                &holding.confirmation_id,
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
