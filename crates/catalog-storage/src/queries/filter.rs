//! Filter predicate shared by the listing fetch and count queries.
//!
//! Built once per request from `CatalogCriteria`; both queries append the
//! same `where_clause()` and bind the same `params()`, so a filter cannot
//! apply to one and not the other.

use rusqlite::types::Value;

use catalog_core::models::{CatalogCriteria, EntityRef};

/// FROM/JOIN clause the predicate is written against.
///
/// Aliases: `p` products, `m` models, `b` brands. One row per product:
/// the space filter uses `EXISTS`, never a join, so it cannot fan out.
pub const CATALOG_FROM: &str = "
    FROM products p
    JOIN models m ON m.id = p.model_id
    LEFT JOIN brands b ON b.id = p.brand_id";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPredicate {
    clauses: Vec<&'static str>,
    params: Vec<Value>,
}

impl FilterPredicate {
    pub fn from_criteria(criteria: &CatalogCriteria) -> Self {
        let mut predicate = Self::default();

        match &criteria.brand {
            Some(EntityRef::Id(id)) => predicate.push("p.brand_id = ?", Value::Integer(*id)),
            Some(EntityRef::Name(name)) => predicate.push("b.name = ?", Value::Text(name.clone())),
            None => {}
        }

        match &criteria.model {
            Some(EntityRef::Id(id)) => predicate.push("p.model_id = ?", Value::Integer(*id)),
            Some(EntityRef::Name(name)) => predicate.push("m.name = ?", Value::Text(name.clone())),
            None => {}
        }

        match &criteria.space {
            Some(EntityRef::Id(id)) => predicate.push(
                "EXISTS (SELECT 1 FROM products_in_spaces fl
                         WHERE fl.product_id = p.id AND fl.space_id = ?)",
                Value::Integer(*id),
            ),
            Some(EntityRef::Name(name)) => predicate.push(
                "EXISTS (SELECT 1 FROM products_in_spaces fl
                         JOIN spaces fs ON fs.id = fl.space_id
                         WHERE fl.product_id = p.id AND fs.name = ?)",
                Value::Text(name.clone()),
            ),
            None => {}
        }

        if let Some(fragment) = criteria.name_substring() {
            predicate.push(
                "catalog_lower(p.name) LIKE ? ESCAPE '\\'",
                Value::Text(format!("%{}%", escape_like(&fragment.to_lowercase()))),
            );
        }

        predicate
    }

    fn push(&mut self, clause: &'static str, param: Value) {
        self.clauses.push(clause);
        self.params.push(param);
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// `""` when unfiltered, otherwise `" WHERE a AND b ..."`.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Positional parameters, in clause order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Escape LIKE wildcards so the fragment matches literally.
fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
