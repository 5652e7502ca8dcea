use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Category, MoneyCents};

/// Text shown in place of an empty description.
pub const NO_DESCRIPTION: &str = "No description";

/// A committed expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    id: Uuid,
    amount: MoneyCents,
    category: Category,
    description: String,
    date: DateTime<Utc>,
}

impl Expense {
    pub(crate) fn new(
        amount: MoneyCents,
        category: Category,
        description: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description,
            date,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> MoneyCents {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The description as entered; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The description, or [`NO_DESCRIPTION`] when it is empty.
    pub fn description_or_placeholder(&self) -> &str {
        if self.description.is_empty() {
            NO_DESCRIPTION
        } else {
            &self.description
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
