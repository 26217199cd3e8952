//! Balance derivation for a group.
//!
//! Balances are never stored: [`summarize`] recomputes them from the group's
//! members and expenses on every query. Expenses are split equally, so every
//! member "should pay" the same per-head share of the total.
//!
//! Because the per-head share is rounded to the cent, the raw balances can
//! miss zero by a few cents. [`reconcile_drift`] is a separate post-pass that
//! moves the whole drift onto a single member so the vector sums to exactly
//! zero.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{Expense, Group, Money};

/// Net position of one member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberBalance {
    pub member_id: Uuid,
    /// Total the member paid for the group.
    pub paid: Money,
    /// Fair share of the total (the per-head amount).
    pub should_pay: Money,
    /// `paid - should_pay`, after drift reconciliation. Positive means the
    /// member is owed money.
    pub balance: Money,
}

/// Derived view of a group's expenses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSummary {
    /// One entry per current member, in member order.
    pub balances: Vec<MemberBalance>,
    pub total_amount: Money,
    pub per_head: Money,
}

/// Computes the balance vector of `group` from its expenses.
///
/// `expenses` should only contain expenses of `group`. Expenses paid by ids
/// that are no longer members still count towards the total.
pub fn summarize<'a>(
    group: &Group,
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> GroupSummary {
    let mut paid_by_member: HashMap<Uuid, Money> = HashMap::new();
    let mut total_amount = Money::ZERO;
    for expense in expenses {
        total_amount += expense.amount;
        *paid_by_member.entry(expense.paid_by).or_default() += expense.amount;
    }

    let per_head = total_amount.split_half_up(group.head_count());

    let mut balances: Vec<MemberBalance> = group
        .members
        .iter()
        .map(|member| {
            let paid = paid_by_member.get(&member.id).copied().unwrap_or_default();
            MemberBalance {
                member_id: member.id,
                paid,
                should_pay: per_head,
                balance: paid - per_head,
            }
        })
        .collect();

    reconcile_drift(&mut balances);

    GroupSummary {
        balances,
        total_amount,
        per_head,
    }
}

/// Forces `balances` to sum to exactly zero and returns the drift removed.
///
/// A positive drift is taken from the member with the largest balance, a
/// negative one is given to the member with the smallest balance. Ties go to
/// the first such member in order.
pub fn reconcile_drift(balances: &mut [MemberBalance]) -> Money {
    let drift: Money = balances.iter().map(|b| b.balance).sum();
    if drift.is_zero() {
        return Money::ZERO;
    }

    let target = if drift.is_positive() {
        first_extreme(balances, |candidate, best| candidate > best)
    } else {
        first_extreme(balances, |candidate, best| candidate < best)
    };

    if let Some(index) = target {
        balances[index].balance -= drift;
        tracing::debug!(
            member_id = %balances[index].member_id,
            drift = %drift,
            "reconciled rounding drift"
        );
    }
    drift
}

/// Index of the first balance that no later balance beats under `beats`.
fn first_extreme(
    balances: &[MemberBalance],
    beats: impl Fn(Money, Money) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, Money)> = None;
    for (index, entry) in balances.iter().enumerate() {
        match best {
            Some((_, value)) if !beats(entry.balance, value) => {}
            _ => best = Some((index, entry.balance)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{Currency, Member, SplitType};

    fn group_with(names: &[&str]) -> Group {
        let mut group = Group::new("Trip".to_string(), None, Currency::Inr);
        for name in names {
            group.members.push(Member {
                id: Uuid::new_v4(),
                name: (*name).to_string(),
                mobile: "0000000000".to_string(),
                payment_handle: None,
            });
        }
        group
    }

    fn expense(group: &Group, paid_by: Uuid, minor: i64) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            group_id: group.id,
            paid_by,
            amount: Money::new(minor),
            description: None,
            category: None,
            split_type: SplitType::Equal,
            timestamp: Utc::now(),
        }
    }

    fn balance(member_id: Uuid, minor: i64) -> MemberBalance {
        MemberBalance {
            member_id,
            paid: Money::ZERO,
            should_pay: Money::ZERO,
            balance: Money::new(minor),
        }
    }

    #[test]
    fn splits_total_equally() {
        let group = group_with(&["A", "B", "C"]);
        let (a, b, c) = (group.members[0].id, group.members[1].id, group.members[2].id);
        let expenses = [expense(&group, a, 600_00), expense(&group, b, 300_00)];

        let summary = summarize(&group, &expenses);

        assert_eq!(summary.total_amount, Money::new(900_00));
        assert_eq!(summary.per_head, Money::new(300_00));
        let got: Vec<_> = summary
            .balances
            .iter()
            .map(|b| (b.member_id, b.paid, b.should_pay, b.balance))
            .collect();
        assert_eq!(
            got,
            vec![
                (a, Money::new(600_00), Money::new(300_00), Money::new(300_00)),
                (b, Money::new(300_00), Money::new(300_00), Money::ZERO),
                (c, Money::ZERO, Money::new(300_00), Money::new(-300_00)),
            ]
        );
    }

    #[test]
    fn moves_positive_drift_to_largest_creditor() {
        let group = group_with(&["A", "B", "C"]);
        let a = group.members[0].id;
        let expenses = [expense(&group, a, 100_00)];

        let summary = summarize(&group, &expenses);

        assert_eq!(summary.per_head, Money::new(33_33));
        let got: Vec<_> = summary.balances.iter().map(|b| b.balance.minor()).collect();
        assert_eq!(got, vec![66_66, -33_33, -33_33]);
        assert_eq!(summary.balances[0].paid, Money::new(100_00));
    }

    #[test]
    fn moves_negative_drift_to_first_largest_debtor() {
        let group = group_with(&["A", "B", "C"]);
        let a = group.members[0].id;
        // 200 / 3 = 66.67: raw balances 133.33, -66.67, -66.67 sum to -0.01.
        let expenses = [expense(&group, a, 200_00)];

        let summary = summarize(&group, &expenses);

        let got: Vec<_> = summary.balances.iter().map(|b| b.balance.minor()).collect();
        assert_eq!(got, vec![133_33, -66_66, -66_67]);
    }

    #[test]
    fn reconcile_is_noop_when_balanced() {
        let mut balances = vec![balance(Uuid::new_v4(), 10), balance(Uuid::new_v4(), -10)];
        assert_eq!(reconcile_drift(&mut balances), Money::ZERO);
        assert_eq!(balances[0].balance, Money::new(10));
        assert_eq!(balances[1].balance, Money::new(-10));
    }

    #[test]
    fn reconcile_breaks_ties_by_member_order() {
        let mut balances = vec![
            balance(Uuid::new_v4(), 5),
            balance(Uuid::new_v4(), 5),
            balance(Uuid::new_v4(), -9),
        ];
        assert_eq!(reconcile_drift(&mut balances), Money::new(1));
        let got: Vec<_> = balances.iter().map(|b| b.balance.minor()).collect();
        assert_eq!(got, vec![4, 5, -9]);
    }

    #[test]
    fn reconcile_handles_empty_vector() {
        assert_eq!(reconcile_drift(&mut []), Money::ZERO);
    }

    #[test]
    fn empty_group_produces_no_balances() {
        let group = group_with(&[]);
        let summary = summarize(&group, std::iter::empty());
        assert!(summary.balances.is_empty());
        assert_eq!(summary.total_amount, Money::ZERO);
        assert_eq!(summary.per_head, Money::ZERO);
    }
}
