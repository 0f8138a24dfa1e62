//! Table query builder
//!
//! Collects a PostgREST request into query-string pairs. Nothing is sent
//! from here; [`GatewayClient`](super::GatewayClient) executes the query.

use std::fmt::Display;

/// A read against one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    range: Option<(u64, u64)>,
}

impl TableQuery {
    /// Start a query selecting every column of `table`.
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            range: None,
        }
    }

    /// Column list, including embeds such as `industry(name)`.
    ///
    /// Whitespace is stripped; PostgREST rejects it outside quoted names.
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Equality filter applied only when a value is present.
    pub fn eq_opt<V: Display>(self, column: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.eq(column, value),
            None => self,
        }
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{}.{}", column, direction));
        self
    }

    /// Rows `start..=end`, zero-based.
    pub fn range(mut self, start: u64, end: u64) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn table_name(&self) -> &'static str {
        self.table
    }

    /// Query-string pairs in the order PostgREST documents them.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 4);
        pairs.push(("select".to_string(), self.select.clone()));
        pairs.extend(self.filters.iter().cloned());

        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.clone()));
        }

        if let Some((start, end)) = self.range {
            let limit = end.saturating_sub(start) + 1;
            pairs.push(("offset".to_string(), start.to_string()));
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}
