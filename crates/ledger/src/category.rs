//! The fixed set of expense categories.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodAndDining,
    Transportation,
    Shopping,
    Entertainment,
    BillsAndUtilities,
    Others,
}

impl Category {
    /// Every category, in the order the select control lists them.
    pub const ALL: [Category; 6] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Shopping,
        Self::Entertainment,
        Self::BillsAndUtilities,
        Self::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsAndUtilities => "Bills & Utilities",
            Self::Others => "Others",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    /// Next entry of the select, wrapping around. `None` starts at the first.
    pub fn cycle_next(current: Option<Category>) -> Category {
        match current {
            None => Self::ALL[0],
            Some(c) => Self::ALL[(c.position() + 1) % Self::ALL.len()],
        }
    }

    /// Previous entry of the select, wrapping around. `None` starts at the last.
    pub fn cycle_prev(current: Option<Category>) -> Category {
        let len = Self::ALL.len();
        match current {
            None => Self::ALL[len - 1],
            Some(c) => Self::ALL[(c.position() + len - 1) % len],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_select_options() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Food & Dining",
                "Transportation",
                "Shopping",
                "Entertainment",
                "Bills & Utilities",
                "Others"
            ]
        );
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        assert_eq!(Category::cycle_next(None), Category::FoodAndDining);
        assert_eq!(Category::cycle_prev(None), Category::Others);
        assert_eq!(
            Category::cycle_next(Some(Category::Others)),
            Category::FoodAndDining
        );
        assert_eq!(
            Category::cycle_prev(Some(Category::FoodAndDining)),
            Category::Others
        );
        assert_eq!(
            Category::cycle_next(Some(Category::Shopping)),
            Category::Entertainment
        );
    }
}
