use std::path::Path;
use std::sync::Arc;

use verdex::catalog::{Catalog, Explorer, SortKey, seed_records};
use verdex::checkout::{CheckoutFlow, CheckoutState, SimulatedSettlementGateway, TradeAction};
use verdex::config::AppConfig;
use verdex::portfolio::{Holding, Portfolio};

const SESSION_STORE: &str = "verdex_session.json";
const PORTFOLIO_CSV: &str = "portfolio.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("\n╔═══════════════════════════════════════════════════════╗");
    println!("║        Verdex Carbon Marketplace — Session Demo       ║");
    println!("╚═══════════════════════════════════════════════════════╝\n");

    let config = AppConfig::load(Path::new(SESSION_STORE));
    println!(
        "Session: logged_in={}, theme={:?}",
        config.logged_in, config.theme
    );

    let catalog = Arc::new(Catalog::load(seed_records())?);
    println!("✓ Catalog loaded: {} records\n", catalog.len());

    println!("[1/4] Exploring the marketplace...");
    let mut explorer = Explorer::new(catalog.clone());

    let view = explorer.view();
    println!(
        "  → All projects: {} records, {} pages, avg price ${:.2}, avg trust {:.1}",
        view.stats.count, view.total_pages, view.stats.average_price, view.stats.average_trust
    );

    explorer.set_category(Some("Forestry".to_string()));
    let view = explorer.view();
    println!(
        "  → Forestry only: {} records on {} page(s), avg trust {:.1}",
        view.stats.count, view.total_pages, view.stats.average_trust
    );

    explorer.set_category(None);
    explorer.set_search_text("amazon");
    explorer.set_sort(Some(SortKey::TrustScoreDescending));
    let view = explorer.view();
    let record = view
        .records
        .first()
        .ok_or_else(|| anyhow::anyhow!("seed catalog is missing the Amazon project"))?
        .clone();
    println!(
        "  → Search 'amazon': {} ({} @ ${:.2}/unit, trust {:.1})\n",
        record.project_name, record.registry, record.price_per_unit, record.trust_score
    );

    println!("[2/4] Reviewing an order...");
    let gateway = Arc::new(SimulatedSettlementGateway::new());
    let flow = CheckoutFlow::begin(&record, TradeAction::Buy, 10, gateway)?;
    let breakdown = flow.breakdown();
    println!(
        "  → 10 units of {}: subtotal ${:.2}, fee ${:.2}, total ${:.2}",
        record.project_name, breakdown.subtotal, breakdown.fee, breakdown.total
    );

    println!("[3/4] Settling (simulated)...");
    let mut portfolio = Portfolio::new();
    match flow.confirm().await? {
        CheckoutState::Success { receipt } => {
            println!("  ✓ Confirmed: {}", receipt.confirmation_id);
            portfolio.add(Holding::from_settlement(flow.request(), breakdown, &receipt));
        }
        CheckoutState::Failed { reason } => println!("  ✗ Settlement failed: {reason}"),
        other => println!("  → Flow ended in {other:?}"),
    }

    println!("\n[4/4] Portfolio summary...");
    let summary = portfolio.summary();
    println!(
        "  → {} holding(s): {} bought, {} retired, ${:.2} spent (${:.2}/unit)",
        summary.holdings,
        summary.units_bought,
        summary.units_retired,
        summary.total_spent,
        summary.average_cost_per_unit
    );

    if !portfolio.is_empty() {
        match portfolio.save_to_csv(PORTFOLIO_CSV) {
            Ok(()) => println!("  ✓ Portfolio saved to {PORTFOLIO_CSV}"),
            Err(e) => println!("  ✗ Error saving {PORTFOLIO_CSV}: {e}"),
        }
    }

    let config = AppConfig {
        logged_in: true,
        ..config
    };
    config.save(Path::new(SESSION_STORE))?;
    println!("  ✓ Session flags saved to {SESSION_STORE}\n");

    Ok(())
}
