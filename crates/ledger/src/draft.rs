use crate::Category;

/// The not-yet-submitted values bound to the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub amount: String,
    pub category: Option<Category>,
    pub description: String,
}

impl Draft {
    /// Returns `true` when every field holds its empty value.
    pub fn is_empty(&self) -> bool {
        self.amount.is_empty() && self.category.is_none() && self.description.is_empty()
    }

    pub fn clear(&mut self) {
        self.amount.clear();
        self.category = None;
        self.description.clear();
    }
}
