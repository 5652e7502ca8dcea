use std::collections::{VecDeque, vec_deque};

use chrono::{DateTime, Utc};

use crate::{Draft, Expense, LedgerError, MoneyCents};

type ResultLedger<T> = Result<T, LedgerError>;

/// The in-memory, newest-first collection of expenses for the session.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: VecDeque<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns `draft` into an expense stamped with the current time.
    ///
    /// See [`Ledger::submit_at`].
    pub fn submit(&mut self, draft: &mut Draft) -> ResultLedger<&Expense> {
        self.submit_at(draft, Utc::now())
    }

    /// Turns `draft` into an expense dated `now` and puts it at the front.
    ///
    /// On success the draft is cleared. On error neither the ledger nor the
    /// draft is touched.
    pub fn submit_at(&mut self, draft: &mut Draft, now: DateTime<Utc>) -> ResultLedger<&Expense> {
        if draft.amount.trim().is_empty() {
            return Err(LedgerError::MissingAmount);
        }
        let category = draft.category.ok_or(LedgerError::MissingCategory)?;
        let amount: MoneyCents = draft.amount.parse()?;

        let expense = Expense::new(amount, category, draft.description.clone(), now);
        tracing::debug!(
            id = %expense.id(),
            amount = %expense.amount(),
            category = %expense.category(),
            "expense added"
        );

        self.entries.push_front(expense);
        draft.clear();

        Ok(&self.entries[0])
    }

    /// Sum of every amount in the ledger, recomputed on each call.
    pub fn total(&self) -> MoneyCents {
        self.entries.iter().map(Expense::amount).sum()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Expense> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.entries.get(index)
    }

    /// The most recently added expense.
    pub fn latest(&self) -> Option<&Expense> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = vec_deque::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
