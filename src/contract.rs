// src/contract.rs
use crate::asset::Asset;
use crate::context::TransactionContext;
use crate::error::LedgerError;
use crate::state::StateIterator;
use metrics::counter;

/// The asset operation surface.
///
/// Every operation runs against the world state reached through the
/// [`TransactionContext`] it is handed; the accessor itself owns nothing but
/// `last_asset_id`. Construct one instance per logical execution context:
/// the field is a process-local hint and must never be shared between
/// unrelated callers. Any correctness-sensitive notion of "the last asset"
/// has to be reconstructed from the world state instead.
#[derive(Debug, Default)]
pub struct AssetLedger {
    last_asset_id: String,
}

impl AssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the fixed seed set. Safe to re-run; existing records are
    /// overwritten in place.
    pub async fn init_ledger(&self, ctx: &TransactionContext) -> Result<(), LedgerError> {
        let seed = [
            Asset::new("asset1", "blue", 5, "Tomoko", 300),
            Asset::new("asset2", "red", 5, "Brad", 400),
            Asset::new("asset3", "green", 10, "Jin Soo", 500),
            Asset::new("asset4", "yellow", 10, "Max", 600),
            Asset::new("asset5", "black", 15, "Adriana", 700),
            Asset::new("asset6", "white", 15, "Michel", 800),
        ];

        for asset in seed {
            let bytes = serde_json::to_vec(&asset)?;
            ctx.state()
                .put_state(&asset.id, &bytes)
                .await
                .map_err(LedgerError::PutState)?;
        }

        counter!("ledger.init.total").increment(1);
        Ok(())
    }

    /// Stores a new record under `id` and remembers the id on this instance.
    pub async fn create_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), LedgerError> {
        if self.asset_exists(ctx, id).await? {
            return Err(LedgerError::AlreadyExists(id.to_string()));
        }

        let asset = Asset::new(id, color, size, owner, appraised_value);
        let bytes = serde_json::to_vec(&asset)?;
        ctx.state()
            .put_state(id, &bytes)
            .await
            .map_err(LedgerError::PutState)?;

        self.last_asset_id = id.to_string();
        counter!("ledger.assets.created").increment(1);
        Ok(())
    }

    pub async fn read_asset(
        &self,
        ctx: &TransactionContext,
        id: &str,
    ) -> Result<Asset, LedgerError> {
        let bytes = ctx
            .state()
            .get_state(id)
            .await
            .map_err(LedgerError::ReadState)?
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;

        let asset = serde_json::from_slice(&bytes)?;
        Ok(asset)
    }

    /// Replaces the whole record at `id` with the given fields.
    pub async fn update_asset(
        &self,
        ctx: &TransactionContext,
        id: &str,
        color: &str,
        size: i64,
        owner: &str,
        appraised_value: i64,
    ) -> Result<(), LedgerError> {
        if !self.asset_exists(ctx, id).await? {
            return Err(LedgerError::NotFound(id.to_string()));
        }

        let asset = Asset::new(id, color, size, owner, appraised_value);
        let bytes = serde_json::to_vec(&asset)?;
        ctx.state()
            .put_state(id, &bytes)
            .await
            .map_err(LedgerError::PutState)?;

        counter!("ledger.assets.updated").increment(1);
        Ok(())
    }

    pub async fn delete_asset(
        &self,
        ctx: &TransactionContext,
        id: &str,
    ) -> Result<(), LedgerError> {
        if !self.asset_exists(ctx, id).await? {
            return Err(LedgerError::NotFound(id.to_string()));
        }

        ctx.state()
            .delete_state(id)
            .await
            .map_err(LedgerError::Storage)?;

        counter!("ledger.assets.deleted").increment(1);
        Ok(())
    }

    /// Hands the record at `id` to `new_owner` and returns the previous
    /// owner.
    ///
    /// Plain read-modify-write: there is no compare-and-swap, so concurrent
    /// transfers of the same id can lose updates unless the surrounding
    /// transaction context serializes them.
    pub async fn transfer_asset(
        &self,
        ctx: &TransactionContext,
        id: &str,
        new_owner: &str,
    ) -> Result<String, LedgerError> {
        let mut asset = self.read_asset(ctx, id).await?;
        let previous_owner = std::mem::replace(&mut asset.owner, new_owner.to_string());

        let bytes = serde_json::to_vec(&asset)?;
        ctx.state()
            .put_state(id, &bytes)
            .await
            .map_err(LedgerError::PutState)?;

        counter!("ledger.assets.transferred").increment(1);
        Ok(previous_owner)
    }

    /// Returns every record in the world state, in key order.
    ///
    /// Any failure while opening or draining the iterator is surfaced
    /// verbatim and discards everything accumulated so far. The iterator is
    /// closed on every exit path; a close failure never displaces the
    /// primary result.
    pub async fn get_all_assets(
        &self,
        ctx: &TransactionContext,
    ) -> Result<Vec<Asset>, LedgerError> {
        let mut iter = ctx
            .state()
            .get_state_by_range("", "")
            .await
            .map_err(LedgerError::Storage)?;

        let result = drain_assets(iter.as_mut()).await;
        let _ = iter.close().await;
        result
    }

    /// True when a non-empty value is stored under `id`.
    pub async fn asset_exists(
        &self,
        ctx: &TransactionContext,
        id: &str,
    ) -> Result<bool, LedgerError> {
        let bytes = ctx
            .state()
            .get_state(id)
            .await
            .map_err(LedgerError::ReadState)?;

        // NOTE: an empty stored value counts as absent here, while
        // read_asset only treats a missing key as absent. The two checks are
        // kept as-is until they can be reconciled.
        Ok(matches!(bytes, Some(ref value) if !value.is_empty()))
    }

    /// The id of the most recent asset created through this instance, or the
    /// empty string if there has been none. Never consults the world state.
    pub fn query_last_asset_id(&self) -> &str {
        &self.last_asset_id
    }
}

async fn drain_assets(iter: &mut dyn StateIterator) -> Result<Vec<Asset>, LedgerError> {
    let mut assets = Vec::new();
    while iter.has_next() {
        let kv = iter.next().await.map_err(LedgerError::Storage)?;
        let asset: Asset = serde_json::from_slice(&kv.value)?;
        assets.push(asset);
    }
    Ok(assets)
}
