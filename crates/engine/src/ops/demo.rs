use uuid::Uuid;

use crate::{ExpenseNew, GroupNew, MemberNew, Money, ResultEngine};

use super::Engine;

impl Engine {
    /// Drops every group and expense, then recreates the demo group.
    ///
    /// The demo group has three members (Demo User, Alice, Bob) and two
    /// expenses: a 600.00 dinner paid by Demo User and 300.00 of snacks paid
    /// by Alice. Returns the id of the new demo group.
    pub fn reset_demo(&mut self) -> ResultEngine<Uuid> {
        self.groups.clear();
        self.expenses.clear();

        let group = self.create_group(
            GroupNew::new("Demo Group")
                .description("A demo FairSplit group")
                .member(MemberNew::new("Demo User", "9999999999").payment_handle("DEMO_UPI@upi"))
                .member(MemberNew::new("Alice", "8888888888").payment_handle("ALICE_UPI@upi"))
                .member(MemberNew::new("Bob", "7777777777").payment_handle("BOB_UPI@upi")),
        )?;
        let (demo_user, alice) = (group.members[0].id, group.members[1].id);

        self.add_expense(
            group.id,
            ExpenseNew::new(demo_user, Money::new(600_00)).description("Dinner"),
        )?;
        self.add_expense(
            group.id,
            ExpenseNew::new(alice, Money::new(300_00)).description("Snacks"),
        )?;

        tracing::info!(group_id = %group.id, "demo data seeded");
        Ok(group.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_demo_owes_bob_to_demo_user() {
        let mut engine = Engine::builder().build().unwrap();
        engine.create_group(GroupNew::new("Stale")).unwrap();

        let group_id = engine.reset_demo().unwrap();

        assert_eq!(engine.groups.len(), 1);
        let group = engine.group(group_id).unwrap();
        let summary = engine.compute_balances(group_id);
        assert_eq!(summary.total_amount, Money::new(900_00));
        let balances: Vec<_> = summary.balances.iter().map(|b| b.balance.minor()).collect();
        assert_eq!(balances, vec![300_00, 0, -300_00]);

        let pairs = engine.settlement(group_id).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].from, group.members[2].id);
        assert_eq!(pairs[0].to, group.members[0].id);
        assert_eq!(
            pairs[0].payment_link,
            "upi://pay?pa=DEMO_UPI%40upi&pn=Demo%20User&am=300.00&cu=INR&tn=FairSplit-Demo"
        );
    }

    #[test]
    fn builder_can_seed() {
        let engine = Engine::builder().seed_demo(true).build().unwrap();
        assert_eq!(engine.groups.len(), 1);
        assert_eq!(engine.expenses.len(), 2);
    }
}
