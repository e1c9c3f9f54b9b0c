//! Writes the pricing config into a plan collection

use std::path::Path;

use anyhow::anyhow;
use deadpool_sqlite::Pool;
use rusqlite::Connection;
use shared::{
    api::error::{Nothing, ServerError},
    model::{PlanEnvironment, PricingPlans},
};
use tracing::{info, instrument};

use crate::db::model::StoredDocument;

/// Upsert one document per tier into `collection`, keyed by tier name
///
/// All writes happen in a single transaction. Tiers already in the collection
/// that aren't in `plans` are left alone
#[instrument(skip(conn, plans))]
pub fn seed_collection(
    conn: &mut Connection,
    collection: &str,
    plans: &PricingPlans,
) -> Result<usize, ServerError<Nothing>> {
    let tx = conn.transaction()?;
    for (tier, fields) in plans.iter() {
        let body = serde_json::to_value(fields)?;
        StoredDocument::upsert::<Nothing>(&tx, collection, tier, &body)?;
    }
    tx.commit()?;

    Ok(plans.len())
}

/// Load the pricing config at `config_path` and seed the collection for `env`
#[instrument(skip(pool))]
pub async fn seed_pricing_plans(
    pool: &Pool,
    env: PlanEnvironment,
    config_path: &Path,
) -> anyhow::Result<usize> {
    let plans = PricingPlans::load(config_path)?;
    let collection = env.collection();

    let conn = pool.get().await.map_err(|e| anyhow!("Getting database connection: {e}"))?;
    let seeded = conn
        .interact(move |conn| seed_collection(conn, collection, &plans))
        .await
        .map_err(|e| anyhow!("Seeding {collection}: {e}"))??;

    info!("Seeded {seeded} plans into {collection}");
    Ok(seeded)
}
