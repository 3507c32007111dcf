use deck_advisor::{
    format_report, read_decklist, read_owned_cards, ColorIdentity, Constraints, DeckAnalyzer,
    EngineResult, InMemoryCatalog, InMemoryPriceFeed,
};
use std::collections::HashSet;

fn usage() -> ! {
    eprintln!(
        "Usage: deck_advisor <catalog.json> <prices.json> <decklist.txt> [owned.csv]\n\
         \n\
         Environment:\n\
         \tDECK_FORMAT   legality format (default: Commander)\n\
         \tDECK_BUDGET   per-card budget in GBP (default: 5.0)\n\
         \tDECK_COLORS   allowed colour symbols, e.g. UR (default: none)\n\
         \tDECK_PERSONA  player persona label (default: empty)"
    );
    std::process::exit(2);
}

fn run() -> EngineResult<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        usage();
    }

    let catalog = InMemoryCatalog::from_json_file(&args[1])?;
    let feed = InMemoryPriceFeed::from_json_file(&args[2])?;
    let decklist = read_decklist(&args[3])?;
    let owned: HashSet<String> = match args.get(4) {
        Some(path) => read_owned_cards(path)?,
        None => HashSet::new(),
    };

    let colors = std::env::var("DECK_COLORS").unwrap_or_default();
    let mut color_identity = ColorIdentity::new();
    for symbol in colors.chars() {
        match deck_advisor::Color::from_symbol(&symbol.to_string()) {
            Some(color) => color_identity.insert(color),
            None => {
                eprintln!("Error: unknown colour symbol '{symbol}' in DECK_COLORS");
                std::process::exit(2);
            }
        }
    }

    let constraints = Constraints {
        format: std::env::var("DECK_FORMAT").unwrap_or_else(|_| "Commander".to_string()),
        budget_per_card: std::env::var("DECK_BUDGET")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5.0),
        color_identity,
        persona: std::env::var("DECK_PERSONA").unwrap_or_default(),
    };

    let analyzer = DeckAnalyzer::new(&catalog, &feed);
    let report = analyzer.analyse(&constraints, &decklist, &owned);
    print!("{}", format_report(&report));
    Ok(())
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=deck_advisor=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("Analysis failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
