//! Ledger and settlement engine for shared group expenses.
//!
//! The [`Engine`] keeps groups, members and an append-only list of expenses in
//! memory. From those it derives each member's balance (see [`balances`]) and
//! a list of transfers that settles the group (see [`settlement`]).
//!
//! ```rust
//! use engine::{Engine, ExpenseNew, GroupNew, MemberNew, Money};
//!
//! let mut engine = Engine::builder().build().unwrap();
//! let group = engine
//!     .create_group(
//!         GroupNew::new("Flat")
//!             .member(MemberNew::new("Asha", "9000000001"))
//!             .member(MemberNew::new("Ravi", "9000000002")),
//!     )
//!     .unwrap();
//! let asha = group.members[0].id;
//! engine
//!     .add_expense(group.id, ExpenseNew::new(asha, Money::new(80_00)))
//!     .unwrap();
//!
//! let pairs = engine.settlement(group.id).unwrap();
//! assert_eq!(pairs[0].to, asha);
//! assert_eq!(pairs[0].amount, Money::new(40_00));
//! ```

pub use balances::{GroupSummary, MemberBalance};
pub use commands::{ExpenseNew, GroupNew, MemberNew};
pub use currency::Currency;
pub use error::EngineError;
pub use expenses::{Expense, ExpenseListing, SplitType};
pub use groups::{Group, Member};
pub use money::Money;
pub use ops::{Engine, EngineBuilder};
pub use payment_link::PaymentLinkTemplate;
pub use settlement::SettlementPair;

pub mod balances;
mod commands;
mod currency;
mod error;
mod expenses;
mod groups;
mod money;
mod ops;
mod payment_link;
pub mod settlement;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
