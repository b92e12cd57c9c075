// pricescrape: search Mercado Libre México for a product, rank the listings by
// how well their titles match the query, and save them as JSON.

use anyhow::Result;
use clap::Parser;
use pricescrape::config::ScrapeConfig;
use pricescrape::listing::{ExtractionError, SearchResult};
use pricescrape::utils::{CHROME_USER_AGENT, DEFAULT_MAX_ITEMS, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pricescrape", version, about = "Search Mercado Libre and rank listings by relevance")]
struct Cli {
    /// Product to search for
    #[arg(default_value = "laptop")]
    query: String,

    /// Maximum number of listing entries to inspect
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    max_items: usize,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Directory for result JSON files
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print results without writing a JSON file
    #[arg(long)]
    no_save: bool,

    /// Skip in-page stealth script injection
    #[arg(long)]
    no_stealth: bool,

    /// User agent passed to Chrome
    #[arg(long, default_value = CHROME_USER_AGENT)]
    user_agent: String,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // chromiumoxide logs every CDP message at these targets
    let filter = ["chromiumoxide::handler=off", "chromiumoxide::conn=off"]
        .into_iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(filter, |filter, directive| filter.add_directive(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn print_results(result: &SearchResult) {
    println!("\n=== RESULTADOS ===\n");
    for listing in result.listings() {
        let tag = if listing.exact_match { "exacta" } else { "parcial" };
        println!("{}. {} [{}]", listing.position, listing.title, tag);
        println!("   Precio: ${} MXN", listing.price);
        println!("   Link: {}\n", listing.link);
    }
    println!(
        "Coincidencias exactas: {} | parciales: {}",
        result.exact_count(),
        result.partial_count()
    );
}

async fn run(cli: Cli) -> Result<()> {
    let config = ScrapeConfig::builder()
        .query(cli.query)
        .max_items(cli.max_items)
        .headless(!cli.headed)
        .stealth_mode(!cli.no_stealth)
        .user_agent(cli.user_agent)
        .output_dir(cli.output_dir)
        .save_json(!cli.no_save)
        .build()?;

    println!("\nIniciando búsqueda de: \"{}\"\n", config.query());

    let result = pricescrape::web_search::search(&config).await?;
    print_results(&result);

    if config.save_json() {
        let path = pricescrape::save_search_result(&result, config.output_dir()).await?;
        println!("\n✓ Resultados guardados en: {}", path.display());
    }

    println!(
        "\n✓ Proceso completado - {} productos encontrados",
        result.total_count()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let query = cli.query.clone();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let page_failure = e
                .downcast_ref::<ExtractionError>()
                .is_some_and(ExtractionError::is_page_failure);
            if page_failure {
                error!(query = %query, "No se encontraron resultados: {}", e);
            } else {
                error!(query = %query, "Error durante el scraping: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
