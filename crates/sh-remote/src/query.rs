//! Query-string builder for the table API.
//!
//! Produces PostgREST-style parameters: `col=eq.value` filters,
//! `order=col.asc|desc`, `limit=N`, always selecting all columns.

/// A table query.
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl Query {
    /// Select-all query with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter on a column.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    /// Order ascending by a column.
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), true));
        self
    }

    /// Order descending by a column.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), false));
        self
    }

    /// Cap the number of rows.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Render as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];
        for (column, value) in &self.filters {
            parts.push(format!("{}=eq.{}", column, value));
        }
        if let Some((column, asc)) = &self.order {
            parts.push(format!(
                "order={}.{}",
                column,
                if *asc { "asc" } else { "desc" }
            ));
        }
        if let Some(n) = self.limit {
            parts.push(format!("limit={}", n));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_query_selects_all() {
        assert_eq!(Query::new().to_query_string(), "select=*");
    }

    #[test]
    fn test_filters_order_and_limit() {
        let q = Query::new()
            .eq("completed", false)
            .order_asc("due_date")
            .limit(3);
        assert_eq!(
            q.to_query_string(),
            "select=*&completed=eq.false&order=due_date.asc&limit=3"
        );
    }

    #[test]
    fn test_multiple_filters_keep_insertion_order() {
        let q = Query::new().eq("course_id", "abc").eq("name", "Quiz");
        assert_eq!(
            q.to_query_string(),
            "select=*&course_id=eq.abc&name=eq.Quiz"
        );
    }

    #[test]
    fn test_order_desc() {
        let q = Query::new().order_desc("created_at").limit(3);
        assert_eq!(q.to_query_string(), "select=*&order=created_at.desc&limit=3");
    }
}
