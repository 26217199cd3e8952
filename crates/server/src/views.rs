//! Conversions from engine values to wire types.

use api_types::{
    Currency,
    expense::{Expense, ExpenseList, MemberBalance, SplitType},
    group::{Group, Member},
    settlement::SettlementPair,
};

fn currency(value: engine::Currency) -> Currency {
    match value {
        engine::Currency::Inr => Currency::Inr,
    }
}

pub(crate) fn member(value: &engine::Member) -> Member {
    Member {
        member_id: value.id,
        name: value.name.clone(),
        mobile: value.mobile.clone(),
        payment_handle: value.payment_handle.clone(),
    }
}

pub(crate) fn group(value: &engine::Group) -> Group {
    Group {
        group_id: value.id,
        group_name: value.name.clone(),
        description: value.description.clone(),
        base_currency: currency(value.base_currency),
        members: value.members.iter().map(member).collect(),
    }
}

pub(crate) fn expense(value: &engine::Expense) -> Expense {
    Expense {
        expense_id: value.id,
        group_id: value.group_id,
        paid_by: value.paid_by,
        amount: value.amount.to_major(),
        description: value.description.clone(),
        category: value.category.clone(),
        split_type: match value.split_type {
            engine::SplitType::Equal => SplitType::Equal,
        },
        timestamp: value.timestamp,
    }
}

fn balance(value: &engine::MemberBalance) -> MemberBalance {
    MemberBalance {
        member_id: value.member_id,
        paid: value.paid.to_major(),
        should_pay: value.should_pay.to_major(),
        balance: value.balance.to_major(),
    }
}

pub(crate) fn expense_list(value: &engine::ExpenseListing) -> ExpenseList {
    ExpenseList {
        expenses: value.expenses.iter().map(expense).collect(),
        balances: value.summary.balances.iter().map(balance).collect(),
        total_amount: value.summary.total_amount.to_major(),
        per_head: value.summary.per_head.to_major(),
    }
}

pub(crate) fn settlement_pair(value: &engine::SettlementPair) -> SettlementPair {
    SettlementPair {
        from: value.from,
        to: value.to,
        amount: value.amount.to_major(),
        payment_link: value.payment_link.clone(),
    }
}
