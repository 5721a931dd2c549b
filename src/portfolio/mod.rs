pub mod holdings;

pub use holdings::{Holding, Portfolio, PortfolioSummary};
