//! Menu Filter
//!
//! Builds the parameterised SELECT behind the home screen's category chips
//! and search box.

use crate::domain::CategorySelection;

const SELECT_MENU: &str = "SELECT id, name, price, description, image, category FROM menu";

/// Category set + name substring restriction.
///
/// Categories combine with OR; the search term must appear in the name
/// exactly as typed (case-sensitive, no wildcards).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    categories: Vec<String>,
    search_term: String,
}

impl MenuFilter {
    /// Filter matching every row
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new<I, S>(categories: I, search_term: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self {
            categories: Vec::new(),
            search_term: search_term.into(),
        };
        for category in categories {
            let category = category.into();
            if !filter.categories.contains(&category) {
                filter.categories.push(category);
            }
        }
        filter
    }

    pub fn from_selection(selection: &CategorySelection, search_term: &str) -> Self {
        Self::new(selection.iter().map(|c| c.as_str()), search_term)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty() && self.search_term.is_empty()
    }

    /// SQL text and its positional parameters
    pub fn to_sql(&self) -> (String, Vec<String>) {
        if self.is_unrestricted() {
            return (format!("{} ORDER BY id", SELECT_MENU), Vec::new());
        }

        let mut sql = format!("{} WHERE 1=1", SELECT_MENU);
        let mut params = Vec::with_capacity(self.categories.len() + 1);

        if !self.categories.is_empty() {
            let clauses = vec!["category = ?"; self.categories.len()].join(" OR ");
            sql.push_str(&format!(" AND ({})", clauses));
            params.extend(self.categories.iter().cloned());
        }

        // instr() instead of LIKE: LIKE folds ASCII case and treats % and _ as wildcards
        if !self.search_term.is_empty() {
            sql.push_str(" AND instr(name, ?) > 0");
            params.push(self.search_term.clone());
        }

        sql.push_str(" ORDER BY id");
        (sql, params)
    }
}
