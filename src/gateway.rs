//! Thin persistence layer over the key-value store
//!
//! Three keys, written whole on every mutation: the serialized group
//! collection, the wallet balance as a fixed-2 string, and the credential
//! as a plain string. Last write wins; there is no versioning.
use super::error::OpError;
use super::group::ProductGroup;
use sled::Db;
use tracing::{debug, warn};

pub const GROUPS_KEY: &str = "product";
pub const WALLET_KEY: &str = "wallet";
pub const CREDENTIAL_KEY: &str = "appPassword";

/// Load the group collection. A missing key or an undecodable blob yields an
/// empty collection; individually malformed records are dropped with a
/// warning rather than failing the load.
pub fn load_groups(db: &Db) -> anyhow::Result<Vec<ProductGroup>> {
    let Some(blob) = db.get(GROUPS_KEY)? else {
        return Ok(Vec::new());
    };
    let decoded: Vec<ProductGroup> = match minicbor::decode(&blob) {
        Ok(groups) => groups,
        Err(err) => {
            warn!(%err, "stored inventory blob is unreadable, starting empty");
            return Ok(Vec::new());
        }
    };

    let total = decoded.len();
    let groups: Vec<ProductGroup> = decoded
        .into_iter()
        .filter(|group| {
            let ok = group.is_well_formed();
            if !ok {
                warn!(group_id = %group.group_id, "skipping malformed stored group");
            }
            ok
        })
        .collect();
    debug!(loaded = groups.len(), total, "inventory loaded");
    Ok(groups)
}

/// Persist the whole collection. An empty slice is written as an explicit
/// empty snapshot, which is distinct from the key never having existed.
pub fn save_groups(db: &Db, groups: &[ProductGroup]) -> Result<(), OpError> {
    let blob = minicbor::to_vec(groups).map_err(|err| OpError::Encode(err.to_string()))?;
    db.insert(GROUPS_KEY, blob)?;
    debug!(count = groups.len(), "inventory persisted");
    Ok(())
}

pub fn load_wallet(db: &Db) -> anyhow::Result<Option<String>> {
    Ok(db
        .get(WALLET_KEY)?
        .map(|raw| String::from_utf8_lossy(&raw).into_owned()))
}

pub fn save_wallet(db: &Db, balance: &str) -> Result<(), OpError> {
    db.insert(WALLET_KEY, balance.as_bytes())?;
    Ok(())
}

pub fn load_credential(db: &Db) -> anyhow::Result<Option<String>> {
    Ok(db
        .get(CREDENTIAL_KEY)?
        .map(|raw| String::from_utf8_lossy(&raw).into_owned()))
}

pub fn save_credential(db: &Db, credential: &str) -> Result<(), OpError> {
    db.insert(CREDENTIAL_KEY, credential.as_bytes())?;
    Ok(())
}
