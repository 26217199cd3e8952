use uuid::Uuid;

use crate::{GroupSummary, ResultEngine, SettlementPair, balances, settlement};

use super::Engine;

impl Engine {
    /// Derives paid / should-pay / balance for every member of a group.
    ///
    /// An unknown group yields the empty summary: callers that need to tell
    /// "missing" from "empty" check existence first (see
    /// [`list_expenses`](Engine::list_expenses)).
    pub fn compute_balances(&self, group_id: Uuid) -> GroupSummary {
        match self.groups.get(&group_id) {
            Some(group) => balances::summarize(group, self.group_expenses(group_id)),
            None => GroupSummary::default(),
        }
    }

    /// Reduces a group's balances into ordered debtor to creditor transfers.
    ///
    /// Returns no transfers for an unknown group.
    pub fn compute_settlement(&self, group_id: Uuid) -> Vec<SettlementPair> {
        let Some(group) = self.groups.get(&group_id) else {
            return Vec::new();
        };
        let summary = balances::summarize(group, self.group_expenses(group_id));
        settlement::settle(group, &summary.balances, &self.payment_link)
    }

    /// Settlement transfers of an existing group.
    pub fn settlement(&self, group_id: Uuid) -> ResultEngine<Vec<SettlementPair>> {
        self.group(group_id)?;
        Ok(self.compute_settlement(group_id))
    }
}
