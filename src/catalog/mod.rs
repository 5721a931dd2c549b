pub mod explorer;
pub mod pipeline;
pub mod record;
pub mod seed;

pub use explorer::Explorer;
pub use pipeline::{
    Catalog, CatalogPage, CatalogStats, DEFAULT_PAGE_SIZE, FilterCriteria, PageState, SortKey,
};
pub use record::{CarbonCreditRecord, CatalogError, CreditStatus};
pub use seed::seed_records;
