//! Service layer API for inventory ledger operations
use super::error::{OpError, ValidationError};
use super::gateway;
use super::group::{GroupForm, ProductGroup};
use super::guard::{AccessGuard, ChallengeChannel};
use super::ids;
use super::wallet::WalletLedger;
use std::sync::Arc;
use tracing::info;

/// State of the entry form: appending new groups, or editing an existing one
/// after the update flow passed its credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Editing(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Title,
    Category,
}

/// What a completed sale did to the store and the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleReceipt {
    pub sold_value_cents: i64,
    pub new_balance_cents: i64,
    pub remaining: u32,
    pub group_removed: bool,
}

pub struct InventoryService {
    instance: Arc<sled::Db>,
    groups: Vec<ProductGroup>,
    wallet: WalletLedger,
    guard: AccessGuard,
    form: FormMode,
}

impl InventoryService {
    /// Load the full session state from the store: group collection, wallet
    /// balance and credential. Called once at startup; every mutation below
    /// writes back synchronously.
    pub fn open(instance: Arc<sled::Db>) -> anyhow::Result<Self> {
        let groups = gateway::load_groups(&instance)?;
        let wallet = WalletLedger::from_persisted(gateway::load_wallet(&instance)?.as_deref());
        let guard = AccessGuard::new(gateway::load_credential(&instance)?);
        Ok(Self {
            instance,
            groups,
            wallet,
            guard,
            form: FormMode::Create,
        })
    }

    pub fn groups(&self) -> &[ProductGroup] {
        &self.groups
    }

    pub fn wallet_balance_cents(&self) -> i64 {
        self.wallet.balance_cents()
    }

    pub fn form_mode(&self) -> FormMode {
        self.form
    }

    pub fn is_enrolled(&self) -> bool {
        self.guard.is_enrolled()
    }

    /// Mandatory first-run enrollment. A no-op when a credential already
    /// exists; otherwise the challenge must run before anything else, and a
    /// non-empty response is persisted as the new credential. Returns whether
    /// a credential was set during this call.
    pub fn enroll_if_needed(
        &mut self,
        channel: &mut dyn ChallengeChannel,
    ) -> Result<bool, OpError> {
        if self.guard.is_enrolled() {
            return Ok(false);
        }
        let Some(secret) = self.guard.enroll(channel).map(str::to_owned) else {
            return Ok(false);
        };
        gateway::save_credential(&self.instance, &secret)?;
        Ok(true)
    }

    /// Commit the entry form. In `Create` mode this appends a new group under
    /// the next free identifier; in `Editing` mode it overwrites the group
    /// selected by `begin_update` and drops back to `Create`. A validation
    /// failure leaves the collection, the form mode and the store untouched.
    pub fn submit(&mut self, form: GroupForm) -> Result<ProductGroup, OpError> {
        let committed = match self.form {
            FormMode::Create => {
                form.validate()?;
                let group_id = ids::next_group_id(&self.groups)?;
                let group = form.finalise(group_id)?;
                self.groups.push(group.clone());
                group
            }
            FormMode::Editing(index) => {
                form.validate()?;
                let group = self
                    .groups
                    .get_mut(index)
                    .ok_or(OpError::NoSuchGroup(index))?;
                form.apply_to(group)?;
                let group = group.clone();
                self.form = FormMode::Create;
                group
            }
        };
        gateway::save_groups(&self.instance, &self.groups)?;
        Ok(committed)
    }

    /// Start the update flow for a group. Credential phase only; the commit
    /// itself is re-validated through [`submit`](Self::submit) rather than a
    /// second password check. On success the form enters `Editing` mode and
    /// the group's current values come back as a prefilled form. A rejection
    /// leaves the form mode untouched.
    pub fn begin_update(
        &mut self,
        index: usize,
        channel: &mut dyn ChallengeChannel,
    ) -> Result<GroupForm, OpError> {
        let group = self.groups.get(index).ok_or(OpError::NoSuchGroup(index))?;
        self.guard.authorize("Enter Password to Update", channel)?;
        let prefill = GroupForm::from_group(group);
        self.form = FormMode::Editing(index);
        Ok(prefill)
    }

    /// Sell `amount` units from a group. Units are consumed from the front of
    /// the unit-id list and the sale value is credited to the wallet. A group
    /// sold down to zero is removed entirely.
    pub fn sell(&mut self, index: usize, amount: u32) -> Result<SaleReceipt, OpError> {
        let group = self.groups.get_mut(index).ok_or(OpError::NoSuchGroup(index))?;
        if group.current_count == 0 {
            return Err(ValidationError::SoldOut.into());
        }
        if amount == 0 || amount > group.current_count {
            return Err(ValidationError::InvalidSellAmount {
                requested: amount,
                available: group.current_count,
            }
            .into());
        }

        let sold_value = i64::from(amount) * group.total_cents();
        let new_balance = self.wallet.credit(sold_value);

        group.product_ids.drain(..amount as usize);
        group.current_count -= amount;
        let remaining = group.current_count;
        let group_removed = remaining == 0;
        if group_removed {
            self.groups.remove(index);
        }

        gateway::save_wallet(&self.instance, &self.wallet.to_persisted())?;
        gateway::save_groups(&self.instance, &self.groups)?;

        Ok(SaleReceipt {
            sold_value_cents: sold_value,
            new_balance_cents: new_balance,
            remaining,
            group_removed,
        })
    }

    /// Delete one group. Requires the credential and an explicit confirmation.
    pub fn delete(
        &mut self,
        index: usize,
        channel: &mut dyn ChallengeChannel,
    ) -> Result<(), OpError> {
        if index >= self.groups.len() {
            return Err(OpError::NoSuchGroup(index));
        }
        self.guard.authorize_destructive(
            "Enter Password to Delete",
            "Are you sure you want to delete this product group?",
            channel,
        )?;
        self.groups.remove(index);
        gateway::save_groups(&self.instance, &self.groups)?;
        Ok(())
    }

    /// Delete every group. Persists an explicit empty snapshot, so the next
    /// allocation starts over at "A".
    pub fn delete_all(&mut self, channel: &mut dyn ChallengeChannel) -> Result<(), OpError> {
        self.guard.authorize_destructive(
            "Enter Password to Delete All",
            "Are you sure you want to delete ALL product groups? This cannot be undone.",
            channel,
        )?;
        self.groups.clear();
        gateway::save_groups(&self.instance, &self.groups)?;
        info!("all product groups deleted");
        Ok(())
    }

    /// Reset the wallet balance to exactly zero.
    pub fn reset_wallet(&mut self, channel: &mut dyn ChallengeChannel) -> Result<(), OpError> {
        self.guard.authorize_destructive(
            "Enter Password to Reset Wallet",
            "Are you sure you want to reset your wallet to $0.00? This cannot be undone.",
            channel,
        )?;
        self.wallet.reset();
        gateway::save_wallet(&self.instance, &self.wallet.to_persisted())?;
        info!("wallet reset");
        Ok(())
    }

    /// Case-insensitive substring search over the selected field. Pure
    /// projection for display; nothing is mutated or persisted.
    pub fn search(&self, query: &str, mode: SearchMode) -> Vec<&ProductGroup> {
        let needle = query.to_lowercase();
        self.groups
            .iter()
            .filter(|group| {
                let haystack = match mode {
                    SearchMode::Title => &group.title,
                    SearchMode::Category => &group.category,
                };
                haystack.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
