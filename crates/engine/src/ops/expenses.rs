use chrono::Utc;
use uuid::Uuid;

use crate::{
    EngineError, Expense, ExpenseListing, ExpenseNew, Money, ResultEngine, SplitType,
    util::normalize_optional,
};

use super::Engine;

impl Engine {
    /// Records an expense paid by a current member of the group.
    ///
    /// Negative amounts are clamped to zero. An expense that would push the
    /// group total past the `Money` range is rejected.
    pub fn add_expense(&mut self, group_id: Uuid, input: ExpenseNew) -> ResultEngine<Expense> {
        let group = self.group(group_id)?;
        if !group.has_member(input.paid_by) {
            return Err(EngineError::InvalidInput(format!(
                "paidBy {} is not a member of the group",
                input.paid_by
            )));
        }

        let amount = input.amount.max(Money::ZERO);
        self.group_expenses(group_id)
            .try_fold(amount, |total, e| total.checked_add(e.amount))
            .ok_or_else(|| EngineError::InvalidAmount("group total too large".to_string()))?;

        let expense = Expense {
            id: Uuid::new_v4(),
            group_id,
            paid_by: input.paid_by,
            amount,
            description: normalize_optional(input.description.as_deref()),
            category: normalize_optional(input.category.as_deref()),
            split_type: SplitType::Equal,
            timestamp: input.timestamp.unwrap_or_else(Utc::now),
        };

        tracing::debug!(
            group_id = %group_id,
            expense_id = %expense.id,
            paid_by = %expense.paid_by,
            amount = %expense.amount,
            "expense added"
        );
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Iterates the expenses of a group in insertion order.
    pub fn group_expenses(&self, group_id: Uuid) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(move |e| e.group_id == group_id)
    }

    /// Lists the expenses of a group together with its balances.
    pub fn list_expenses(&self, group_id: Uuid) -> ResultEngine<ExpenseListing> {
        self.group(group_id)?;
        Ok(ExpenseListing {
            expenses: self.group_expenses(group_id).cloned().collect(),
            summary: self.compute_balances(group_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{GroupNew, MemberNew};

    fn engine_with_group() -> (Engine, Uuid, Vec<Uuid>) {
        let mut engine = Engine::builder().build().unwrap();
        let group = engine
            .create_group(
                GroupNew::new("Flat")
                    .member(MemberNew::new("Asha", "1"))
                    .member(MemberNew::new("Ravi", "2")),
            )
            .unwrap();
        let ids = group.members.iter().map(|m| m.id).collect();
        (engine, group.id, ids)
    }

    #[test]
    fn add_expense_requires_current_member() {
        let (mut engine, group_id, _) = engine_with_group();
        let stranger = Uuid::new_v4();

        let err = engine
            .add_expense(group_id, ExpenseNew::new(stranger, Money::new(5_00)))
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert_eq!(engine.group_expenses(group_id).count(), 0);
    }

    #[test]
    fn add_expense_to_unknown_group_fails() {
        let (mut engine, _, members) = engine_with_group();
        let err = engine
            .add_expense(Uuid::new_v4(), ExpenseNew::new(members[0], Money::new(5_00)))
            .unwrap_err();
        assert!(matches!(err, EngineError::KeyNotFound(_)));
    }

    #[test]
    fn add_expense_clamps_negative_amount() {
        let (mut engine, group_id, members) = engine_with_group();
        let expense = engine
            .add_expense(group_id, ExpenseNew::new(members[0], Money::new(-5_00)))
            .unwrap();
        assert_eq!(expense.amount, Money::ZERO);
    }

    #[test]
    fn add_expense_rejects_group_total_overflow() {
        let (mut engine, group_id, members) = engine_with_group();
        let huge = Money::from_major(5e16).unwrap();
        engine
            .add_expense(group_id, ExpenseNew::new(members[0], huge))
            .unwrap();

        let err = engine
            .add_expense(group_id, ExpenseNew::new(members[1], huge))
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::InvalidAmount("group total too large".to_string())
        );
        let listing = engine.list_expenses(group_id).unwrap();
        assert_eq!(listing.expenses.len(), 1);
        assert_eq!(listing.summary.total_amount, huge);
        assert_eq!(engine.settlement(group_id).unwrap().len(), 1);
    }

    #[test]
    fn add_expense_keeps_metadata() {
        let (mut engine, group_id, members) = engine_with_group();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();

        let expense = engine
            .add_expense(
                group_id,
                ExpenseNew::new(members[1], Money::new(12_50))
                    .description(" Dinner ")
                    .category("food")
                    .timestamp(at),
            )
            .unwrap();

        assert_eq!(expense.group_id, group_id);
        assert_eq!(expense.description.as_deref(), Some("Dinner"));
        assert_eq!(expense.category.as_deref(), Some("food"));
        assert_eq!(expense.split_type, SplitType::Equal);
        assert_eq!(expense.timestamp, at);
    }

    #[test]
    fn list_expenses_filters_by_group() {
        let (mut engine, group_id, members) = engine_with_group();
        let other = engine
            .create_group(GroupNew::new("Other").member(MemberNew::new("Kiran", "3")))
            .unwrap();
        engine
            .add_expense(group_id, ExpenseNew::new(members[0], Money::new(10_00)))
            .unwrap();
        engine
            .add_expense(other.id, ExpenseNew::new(other.members[0].id, Money::new(99_00)))
            .unwrap();

        let listing = engine.list_expenses(group_id).unwrap();

        assert_eq!(listing.expenses.len(), 1);
        assert_eq!(listing.summary.total_amount, Money::new(10_00));
        assert_eq!(listing.summary.per_head, Money::new(5_00));
        assert!(engine.list_expenses(Uuid::new_v4()).is_err());
    }
}
