//! Reduction of a balance vector into point-to-point transfers.
//!
//! The reducer is greedy: debtors and creditors are both sorted by amount,
//! largest first, and matched with two cursors. It does not always find the
//! minimum number of transfers, but its output is deterministic for a given
//! balance vector.

use uuid::Uuid;

use crate::{Group, MemberBalance, Money, PaymentLinkTemplate};

/// One transfer from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementPair {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: Money,
    pub payment_link: String,
}

/// Remaining amount a member still has to pay or receive.
#[derive(Debug)]
struct Position {
    member_id: Uuid,
    remaining: Money,
}

/// Produces the ordered transfers that bring every balance of `group` to zero.
///
/// `balances` is expected to sum to zero (see
/// [`reconcile_drift`](crate::balances::reconcile_drift)). Zero balances never
/// take part in a transfer.
pub fn settle(
    group: &Group,
    balances: &[MemberBalance],
    template: &PaymentLinkTemplate,
) -> Vec<SettlementPair> {
    let mut debtors: Vec<Position> = balances
        .iter()
        .filter(|b| b.balance.is_negative())
        .map(|b| Position {
            member_id: b.member_id,
            remaining: -b.balance,
        })
        .collect();
    let mut creditors: Vec<Position> = balances
        .iter()
        .filter(|b| b.balance.is_positive())
        .map(|b| Position {
            member_id: b.member_id,
            remaining: b.balance,
        })
        .collect();

    // Stable sorts: equal amounts keep member order.
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let pay = debtor.remaining.min(creditor.remaining);

        pairs.push(SettlementPair {
            from: debtor.member_id,
            to: creditor.member_id,
            amount: pay,
            payment_link: template.link(
                group.member(creditor.member_id),
                pay,
                group.base_currency,
            ),
        });

        debtor.remaining -= pay;
        creditor.remaining -= pay;
        if debtor.remaining.is_zero() {
            i += 1;
        }
        if creditor.remaining.is_zero() {
            j += 1;
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Currency, Member};

    fn group_with(count: usize) -> Group {
        let mut group = Group::new("Trip".to_string(), None, Currency::Inr);
        for n in 0..count {
            group.members.push(Member {
                id: Uuid::new_v4(),
                name: format!("M{n}"),
                mobile: "0000000000".to_string(),
                payment_handle: Some(format!("m{n}@upi")),
            });
        }
        group
    }

    fn balances_for(group: &Group, minors: &[i64]) -> Vec<MemberBalance> {
        group
            .members
            .iter()
            .zip(minors)
            .map(|(member, &minor)| MemberBalance {
                member_id: member.id,
                paid: Money::ZERO,
                should_pay: Money::ZERO,
                balance: Money::new(minor),
            })
            .collect()
    }

    fn ids(group: &Group) -> Vec<Uuid> {
        group.members.iter().map(|m| m.id).collect()
    }

    #[test]
    fn single_transfer_closes_both_sides() {
        let group = group_with(3);
        let m = ids(&group);
        let balances = balances_for(&group, &[300_00, 0, -300_00]);

        let pairs = settle(&group, &balances, &PaymentLinkTemplate::default());

        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].from, pairs[0].to), (m[2], m[0]));
        assert_eq!(pairs[0].amount, Money::new(300_00));
        assert_eq!(
            pairs[0].payment_link,
            "upi://pay?pa=m0%40upi&pn=M0&am=300.00&cu=INR&tn=FairSplit-Demo"
        );
    }

    #[test]
    fn matches_largest_first() {
        let group = group_with(4);
        let m = ids(&group);
        // Creditors: m0 = 50, m1 = 70. Debtors: m2 = 40, m3 = 80.
        let balances = balances_for(&group, &[50, 70, -40, -80]);

        let pairs = settle(&group, &balances, &PaymentLinkTemplate::default());

        let got: Vec<_> = pairs.iter().map(|p| (p.from, p.to, p.amount.minor())).collect();
        assert_eq!(
            got,
            vec![(m[3], m[1], 70), (m[3], m[0], 10), (m[2], m[0], 40)]
        );
    }

    #[test]
    fn equal_amounts_keep_member_order() {
        let group = group_with(4);
        let m = ids(&group);
        let balances = balances_for(&group, &[-10, 10, -10, 10]);

        let pairs = settle(&group, &balances, &PaymentLinkTemplate::default());

        let got: Vec<_> = pairs.iter().map(|p| (p.from, p.to)).collect();
        assert_eq!(got, vec![(m[0], m[1]), (m[2], m[3])]);
    }

    #[test]
    fn settled_group_needs_no_transfers() {
        let group = group_with(2);
        let balances = balances_for(&group, &[0, 0]);
        assert!(settle(&group, &balances, &PaymentLinkTemplate::default()).is_empty());
    }

    #[test]
    fn recipient_missing_from_group_uses_fallbacks() {
        let mut group = group_with(2);
        let balances = balances_for(&group, &[25, -25]);
        group.members.remove(0);

        let pairs = settle(&group, &balances, &PaymentLinkTemplate::default());

        assert_eq!(
            pairs[0].payment_link,
            "upi://pay?pa=DEMO_UPI%40upi&pn=Demo&am=0.25&cu=INR&tn=FairSplit-Demo"
        );
    }
}
