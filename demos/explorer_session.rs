use std::sync::Arc;

use verdex::catalog::{Catalog, CreditStatus, Explorer, SortKey, seed_records};

fn main() {
    println!("Explorer Session Demo\n");

    let catalog = Arc::new(Catalog::load(seed_records()).expect("seed catalog is valid"));
    let mut explorer = Explorer::new(catalog);

    explorer.set_status(Some(CreditStatus::Active));
    explorer.set_sort(Some(SortKey::PriceAscending));

    let view = explorer.view();
    println!(
        "✓ {} active projects, avg ${:.2}/unit, avg trust {:.1}\n",
        view.stats.count, view.stats.average_price, view.stats.average_trust
    );

    for record in &view.records {
        println!(
            "  {:<42} {:<22} ${:>6.2}  trust {:>5.1}",
            record.project_name, record.registry, record.price_per_unit, record.trust_score
        );
    }
}
