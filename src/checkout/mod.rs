pub mod flow;
pub mod gateway;

pub use flow::{
    CheckoutError, CheckoutFlow, CheckoutState, FEE_RATE, PriceBreakdown, TradeAction,
    TransactionRequest,
};
pub use gateway::{
    DEFAULT_SETTLEMENT_DELAY, SettlementError, SettlementGateway, SettlementReceipt,
    SimulatedOutcome, SimulatedSettlementGateway,
};
