//! Purpose: Demonstrate a consumer of the roster store (the presentation layer's role).
//! Role: Loads the roster, applies a search term from argv, prints the finalized view.
//! Invariants: All state lives in the store; this consumer only renders snapshots.
use rollbook::api::{AgeBand, EndpointClient, RosterStore, summarize};
use rollbook::notice::NoticeKind;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let collection_url = match std::env::var("ROLLBOOK_COLLECTION_URL") {
        Ok(value) => value,
        Err(_) => {
            eprintln!("set ROLLBOOK_COLLECTION_URL to the remote collection address");
            std::process::exit(2);
        }
    };
    let client = match EndpointClient::new(collection_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let store = RosterStore::new(client);
    store.load().await;
    if let Some(term) = std::env::args().nth(1) {
        store.set_search_term(term);
    }

    let snapshot = store.snapshot();
    let stats = summarize(&snapshot.records);
    println!(
        "{} students, average age {}",
        stats.total, stats.average_age
    );
    if !snapshot.search_term.is_empty() {
        println!(
            "matching \"{}\": {} of {}",
            snapshot.search_term,
            snapshot.filtered.len(),
            snapshot.records.len()
        );
    }
    for record in &snapshot.filtered {
        println!(
            "  {} (age {}, {:?}) RA {}",
            record.name,
            record.age,
            AgeBand::from_age(record.age),
            record.registration
        );
    }

    for notice in store.take_notices() {
        match notice.kind {
            NoticeKind::Success => println!("ok: {}", notice.message),
            NoticeKind::Error => eprintln!("warning: {}", notice.message),
        }
    }
}
