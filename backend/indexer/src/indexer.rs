//! Background task that polls the Soroban RPC and writes decoded campaign
//! ledger events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Where the next poll starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Position {
    ledger: u32,
    cursor: Option<String>,
}

/// Run the poll loop until `shutdown` is cancelled.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    let mut position = resume_position(&state.pool, state.config.start_ledger).await;
    info!("Resuming from ledger {}", position.ledger);

    loop {
        match poll_once(&state, &position).await {
            Ok(next) => position = next,
            Err(e) => error!("Indexer poll error: {e}"),
        }

        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Indexer stopping at ledger {}", position.ledger);
                break;
            }
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }
}

/// Saved cursor if there is one, else the configured start ledger.
async fn resume_position(pool: &SqlitePool, start_ledger: u32) -> Position {
    let last_ledger = db::get_last_ledger(pool).await.unwrap_or(0);
    let cursor = db::get_cursor_string(pool).await.unwrap_or(None);
    Position {
        ledger: if last_ledger > 0 {
            last_ledger as u32
        } else {
            start_ledger
        },
        cursor,
    }
}

async fn poll_once(state: &IndexerState, position: &Position) -> Result<Position> {
    let page = rpc::fetch_events(
        &state.client,
        &state.config.rpc_url,
        &state.config.contract_id,
        position.ledger,
        position.cursor.as_deref(),
        state.config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &state.config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next = Position {
        ledger: next_ledger(position.ledger, page.latest_ledger),
        cursor: page.cursor,
    };
    db::save_cursor(&state.pool, next.ledger as i64, next.cursor.as_deref()).await?;
    Ok(next)
}

/// The ledger never moves backwards, even if the RPC reports an older tip.
fn next_ledger(current: u32, latest: Option<u64>) -> u32 {
    latest
        .map(|l| u32::try_from(l).unwrap_or(u32::MAX).max(current))
        .unwrap_or(current)
}
