use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::fmt::format::FmtSpan;

use markdown_notes::config::Args;
use markdown_notes::grammar::LanguageTool;
use markdown_notes::routes;
use markdown_notes::store::{MemoryStore, NoteStore, Store};
use markdown_notes::workflow::NoteService;

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    dotenv::dotenv().ok();
    let config = Args::load()?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},markdown_notes={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store: Arc<dyn NoteStore> = match config.database_url() {
        Some(db_url) => {
            let store = Store::new(&db_url, config.database_max_connections).await?;
            store.migrate().await?;
            info!("database connected");
            Arc::new(store)
        }
        None => {
            warn!("no database_host configured, notes are kept in memory");
            Arc::new(MemoryStore::default())
        }
    };

    let grammar = LanguageTool::new(
        &config.grammar_api_url,
        &config.grammar_language,
        config.grammar_timeout(),
    )?;
    let service = NoteService::new(store, Arc::new(grammar), config.content_limits());

    info!("Running on {}", config.port);
    warp::serve(routes::routes(service))
        .run(([0, 0, 0, 0], config.port))
        .await;

    Ok(())
}
