//! Verdex: the data core of a (fictitious) carbon-credit marketplace.
//!
//! The crate covers what the site actually computes: a typed credit
//! catalog with a filter/sort/paginate pipeline ([`catalog`]), a
//! simulated purchase/retirement flow with an injectable settlement
//! gateway ([`checkout`]), session holdings with CSV export
//! ([`portfolio`]), and the two persisted session flags ([`config`]).

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod portfolio;

pub use catalog::{
    Catalog, CarbonCreditRecord, CatalogError, CatalogPage, CatalogStats, CreditStatus, Explorer,
    FilterCriteria, PageState, SortKey, seed_records,
};
pub use checkout::{
    CheckoutError, CheckoutFlow, CheckoutState, PriceBreakdown, SettlementGateway,
    SimulatedOutcome, SimulatedSettlementGateway, TradeAction, TransactionRequest,
};
pub use config::{AppConfig, Theme};
pub use portfolio::{Holding, Portfolio};
