use std::fmt::Debug;

/// A sortable column; `field_name` is the value sent as `sortBy`.
pub trait SortKey: Copy + Eq + Debug + 'static {
    fn field_name(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<K> {
    pub by: K,
    pub ascending: bool,
}

impl<K: SortKey> SortOrder<K> {
    pub fn ascending(by: K) -> Self {
        Self {
            by,
            ascending: true,
        }
    }

    /// Result of clicking a column label: the active column flips direction,
    /// any other column starts ascending.
    pub fn toggled(self, column: K) -> Self {
        if self.by == column {
            Self {
                by: column,
                ascending: !self.ascending,
            }
        } else {
            Self::ascending(column)
        }
    }

    pub fn aria_sort(&self, column: K) -> &'static str {
        match (self.by == column, self.ascending) {
            (false, _) => "none",
            (true, true) => "ascending",
            (true, false) => "descending",
        }
    }

    pub fn indicator(&self, column: K) -> &'static str {
        match self.aria_sort(column) {
            "ascending" => "▲",
            "descending" => "▼",
            _ => "",
        }
    }

    pub(crate) fn push_query(&self, pairs: &mut Vec<(&'static str, String)>) {
        pairs.push(("sortBy", self.by.field_name().to_string()));
        pairs.push(("sortAscending", self.ascending.to_string()));
    }
}
