use std::collections::HashMap;

use uuid::Uuid;

use crate::{Expense, Group, PaymentLinkTemplate, ResultEngine};

mod demo;
mod expenses;
mod groups;
mod queries;

/// In-memory store of groups and expenses.
///
/// Mutations take `&mut self`, queries take `&self`. Callers that share an
/// engine between tasks must put it behind a single lock so writes are
/// serialized.
#[derive(Debug, Default)]
pub struct Engine {
    groups: HashMap<Uuid, Group>,
    /// Append-only ledger of every group's expenses, in insertion order.
    expenses: Vec<Expense>,
    payment_link: PaymentLinkTemplate,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    payment_link: PaymentLinkTemplate,
    seed_demo: bool,
}

impl EngineBuilder {
    /// Override the payment link defaults.
    pub fn payment_link(mut self, template: PaymentLinkTemplate) -> EngineBuilder {
        self.payment_link = template;
        self
    }

    /// Start with the demo group already in place.
    pub fn seed_demo(mut self, seed: bool) -> EngineBuilder {
        self.seed_demo = seed;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> ResultEngine<Engine> {
        let mut engine = Engine {
            groups: HashMap::new(),
            expenses: Vec::new(),
            payment_link: self.payment_link,
        };
        if self.seed_demo {
            engine.reset_demo()?;
        }
        Ok(engine)
    }
}
