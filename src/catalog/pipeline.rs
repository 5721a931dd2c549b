use std::collections::HashSet;

use super::record::{CarbonCreditRecord, CatalogError, CreditStatus};

pub const DEFAULT_PAGE_SIZE: usize = 9;

/// User-selected filter constraints. `None` (or an empty search string)
/// means "all" for that field; constraints are ANDed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub registry: Option<String>,
    pub status: Option<CreditStatus>,
    pub vintage_year: Option<u16>,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &CarbonCreditRecord) -> bool {
        let needle = self.search_text.trim();
        if !needle.is_empty() {
            let haystack = record.project_name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(registry) = &self.registry {
            if *registry != record.registry {
                return false;
            }
        }
        if let Some(status) = self.status {
            if status != record.status {
                return false;
            }
        }
        if let Some(year) = self.vintage_year {
            if year != record.vintage_year {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if *category != record.project_category {
                return false;
            }
        }
        true
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    TrustScoreDescending,
    PriceAscending,
    PriceDescending,
    VintageDescending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Aggregates over the filtered (not paginated) set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub count: usize,
    pub average_price: f64,
    pub average_trust: f64,
}

/// The slice of records a view should render, plus page bookkeeping.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub records: Vec<CarbonCreditRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub stats: CatalogStats,
}

/// The immutable record set, constructed once at startup.
pub struct Catalog {
    records: Vec<CarbonCreditRecord>,
}

impl Catalog {
    /// Validates every record on the way in; a malformed record is a
    /// load-time error, never a runtime hole.
    pub fn load(records: Vec<CarbonCreditRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        log::debug!("catalog loaded with {} records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CarbonCreditRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CarbonCreditRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<CarbonCreditRecord> {
        self.records
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect()
    }

    /// Runs the full filter -> sort -> paginate pipeline.
    pub fn query(
        &self,
        criteria: &FilterCriteria,
        sort: Option<SortKey>,
        page: PageState,
    ) -> CatalogPage {
        let mut filtered = self.filtered(criteria);
        let stats = aggregate_stats(&filtered);
        if let Some(key) = sort {
            sort_records(&mut filtered, key);
        }
        let total_pages = total_pages(filtered.len(), page.page_size);
        let records = paginate(&filtered, page).to_vec();
        CatalogPage {
            records,
            current_page: page.current_page,
            total_pages,
            stats,
        }
    }
}

/// Stable sort; records comparing equal keep their original order.
pub fn sort_records(records: &mut [CarbonCreditRecord], key: SortKey) {
    match key {
        SortKey::TrustScoreDescending => {
            records.sort_by(|a, b| b.trust_score.total_cmp(&a.trust_score));
        }
        SortKey::PriceAscending => {
            records.sort_by(|a, b| a.price_per_unit.total_cmp(&b.price_per_unit));
        }
        SortKey::PriceDescending => {
            records.sort_by(|a, b| b.price_per_unit.total_cmp(&a.price_per_unit));
        }
        SortKey::VintageDescending => {
            records.sort_by(|a, b| b.vintage_year.cmp(&a.vintage_year));
        }
    }
}

/// Slice for `[(page-1)*size, page*size)`; empty past the end.
pub fn paginate(records: &[CarbonCreditRecord], page: PageState) -> &[CarbonCreditRecord] {
    let start = (page.current_page.saturating_sub(1)) * page.page_size;
    if start >= records.len() {
        return &[];
    }
    let end = (start + page.page_size).min(records.len());
    &records[start..end]
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Divisor falls back to 1 for the empty set so averages are 0.0, not NaN.
pub fn aggregate_stats(records: &[CarbonCreditRecord]) -> CatalogStats {
    let count = records.len();
    let divisor = count.max(1) as f64;
    let average_price = records.iter().map(|r| r.price_per_unit).sum::<f64>() / divisor;
    let average_trust = records.iter().map(|r| r.trust_score).sum::<f64>() / divisor;
    CatalogStats {
        count,
        average_price,
        average_trust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_records;

    fn catalog() -> Catalog {
        Catalog::load(seed_records()).unwrap()
    }

    #[test]
    fn unconstrained_criteria_pass_every_record() {
        let catalog = catalog();
        let filtered = catalog.filtered(&FilterCriteria::default());
        assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn filtered_set_is_a_subset_satisfying_every_criterion() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            registry: Some("Verra".to_string()),
            status: Some(CreditStatus::Active),
            ..Default::default()
        };
        let filtered = catalog.filtered(&criteria);
        assert!(filtered.len() < catalog.len());
        for record in &filtered {
            assert_eq!(record.registry, "Verra");
            assert_eq!(record.status, CreditStatus::Active);
            assert!(catalog.get(&record.id).is_some());
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            category: Some("Renewable Energy".to_string()),
            ..Default::default()
        };
        let once = catalog.filtered(&criteria);
        let twice: Vec<_> = once.iter().filter(|r| criteria.matches(r)).collect();
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let catalog = catalog();
        for needle in ["amazon", "AMAZON", "  Amazon  "] {
            let criteria = FilterCriteria {
                search_text: needle.to_string(),
                ..Default::default()
            };
            let filtered = catalog.filtered(&criteria);
            assert_eq!(filtered.len(), 1, "needle {needle:?}");
            assert_eq!(filtered[0].project_name, "Amazon Rainforest Conservation");
        }
    }

    #[test]
    fn unknown_registry_matches_nothing() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            registry: Some("Registry That Does Not Exist".to_string()),
            ..Default::default()
        };
        assert!(catalog.filtered(&criteria).is_empty());
    }

    #[test]
    fn forestry_scenario_fits_on_one_page() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 23);
        let criteria = FilterCriteria {
            category: Some("Forestry".to_string()),
            ..Default::default()
        };
        let page = catalog.query(&criteria, None, PageState::new(9));
        assert_eq!(page.stats.count, 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.records.len(), 6);
    }

    #[test]
    fn pages_are_disjoint_contiguous_and_reconstruct_the_filtered_set() {
        let catalog = catalog();
        let criteria = FilterCriteria::default();
        let filtered = catalog.filtered(&criteria);
        let page_size = 9;
        let pages = total_pages(filtered.len(), page_size);
        assert_eq!(pages, 3);

        let mut reassembled = Vec::new();
        for current_page in 1..=pages {
            let slice = paginate(
                &filtered,
                PageState {
                    current_page,
                    page_size,
                },
            );
            assert!(slice.len() <= page_size);
            reassembled.extend(slice.iter().cloned());
        }
        assert_eq!(reassembled.len(), filtered.len());
        for (a, b) in reassembled.iter().zip(filtered.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let catalog = catalog();
        let filtered = catalog.filtered(&FilterCriteria::default());
        let slice = paginate(
            &filtered,
            PageState {
                current_page: 99,
                page_size: 9,
            },
        );
        assert!(slice.is_empty());
    }

    #[test]
    fn empty_filtered_set_has_zero_pages_and_fallback_stats() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            search_text: "zzzz-no-such-project".to_string(),
            ..Default::default()
        };
        let page = catalog.query(&criteria, None, PageState::new(9));
        assert_eq!(page.total_pages, 0);
        assert!(page.records.is_empty());
        assert_eq!(page.stats.count, 0);
        assert_eq!(page.stats.average_price, 0.0);
        assert_eq!(page.stats.average_trust, 0.0);
        assert!(!page.stats.average_price.is_nan());
    }

    #[test]
    fn averages_stay_within_min_max_of_the_filtered_set() {
        let catalog = catalog();
        let filtered = catalog.filtered(&FilterCriteria::default());
        let stats = aggregate_stats(&filtered);
        let min_price = filtered.iter().map(|r| r.price_per_unit).fold(f64::MAX, f64::min);
        let max_price = filtered.iter().map(|r| r.price_per_unit).fold(f64::MIN, f64::max);
        assert!(stats.average_price >= min_price && stats.average_price <= max_price);
        let min_trust = filtered.iter().map(|r| r.trust_score).fold(f64::MAX, f64::min);
        let max_trust = filtered.iter().map(|r| r.trust_score).fold(f64::MIN, f64::max);
        assert!(stats.average_trust >= min_trust && stats.average_trust <= max_trust);
    }

    #[test]
    fn price_sorts_are_exact_reverses_for_distinct_prices() {
        let catalog = catalog();
        let mut ascending = catalog.filtered(&FilterCriteria::default());
        let mut descending = ascending.clone();
        sort_records(&mut ascending, SortKey::PriceAscending);
        sort_records(&mut descending, SortKey::PriceDescending);

        // seed prices are all distinct, so the orders must mirror exactly
        let prices: HashSet<String> = ascending
            .iter()
            .map(|r| format!("{:.2}", r.price_per_unit))
            .collect();
        assert_eq!(prices.len(), ascending.len());

        descending.reverse();
        for (a, b) in ascending.iter().zip(descending.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn trust_sort_is_descending() {
        let catalog = catalog();
        let mut records = catalog.filtered(&FilterCriteria::default());
        sort_records(&mut records, SortKey::TrustScoreDescending);
        for pair in records.windows(2) {
            assert!(pair[0].trust_score >= pair[1].trust_score);
        }
    }

    #[test]
    fn vintage_sort_is_descending() {
        let catalog = catalog();
        let mut records = catalog.filtered(&FilterCriteria::default());
        sort_records(&mut records, SortKey::VintageDescending);
        for pair in records.windows(2) {
            assert!(pair[0].vintage_year >= pair[1].vintage_year);
        }
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let mut records = seed_records();
        let dup = records[0].clone();
        records.push(dup);
        assert!(matches!(
            Catalog::load(records),
            Err(CatalogError::DuplicateId(_))
        ));
    }
}
