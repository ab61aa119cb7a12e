use anyhow::Context;
use contracts::dashboards::d404_fiscal_outlook::RecordStore;
use once_cell::sync::OnceCell;

/// Набор муниципалитетов, поставляемый вместе с бинарником
const BUNDLED_RECORDS: &str = include_str!("../../../data/d404_municipalities.json");

static RECORD_STORE: OnceCell<RecordStore> = OnceCell::new();

/// Read the record set: from `path` when configured, otherwise the bundled one
pub fn load_records(path: Option<&str>) -> anyhow::Result<RecordStore> {
    match path {
        Some(path) => {
            let resolved = crate::shared::config::resolve_path(path);
            tracing::info!("D404: Loading records from {}", resolved.display());
            let contents = std::fs::read_to_string(&resolved)
                .with_context(|| format!("cannot read {}", resolved.display()))?;
            RecordStore::from_json(&contents)
                .with_context(|| format!("invalid record set in {}", resolved.display()))
        }
        None => RecordStore::from_json(BUNDLED_RECORDS).context("invalid bundled record set"),
    }
}

/// Store the record set for the lifetime of the process. Only the first call wins.
pub fn initialize(store: RecordStore) -> anyhow::Result<()> {
    let count = store.len();
    RECORD_STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("D404 record store already initialized"))?;
    tracing::info!("D404: Record store initialized with {} records", count);
    Ok(())
}

pub fn get_store() -> anyhow::Result<&'static RecordStore> {
    RECORD_STORE
        .get()
        .ok_or_else(|| anyhow::anyhow!("D404 record store is not initialized"))
}
