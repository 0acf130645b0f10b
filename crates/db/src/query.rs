//! Parameterized statement composition for filtered event listings.
//!
//! [`FilteredSelect`] only accepts `'static` column expressions and appends
//! each predicate together with its `$n` placeholder and bound value, so the
//! placeholder order always matches the bind order and request data never
//! becomes part of the SQL text.

use charity_core::types::{DbId, EventTimestamp};
use chrono::NaiveDate;

/// Event columns with monetary values cast to text for [`crate::normalize`].
pub const EVENT_COLUMNS: &str = "\
    e.event_id, e.event_name, e.description, e.event_date, e.event_location, \
    e.ticket_price::TEXT AS ticket_price, e.category_id, e.organization_id, \
    e.fund_target::TEXT AS fund_target, e.current_fund::TEXT AS current_fund, \
    e.is_active";

/// Join clause shared by the list and detail queries.
pub const EVENT_JOINS: &str = "\
    FROM charity_events e \
    JOIN event_categories c ON e.category_id = c.category_id \
    JOIN charity_organizations o ON e.organization_id = o.organization_id";

/// Ordering for every event listing.
const EVENT_LIST_ORDER: &str = "e.event_date ASC, e.event_id ASC";

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
    Date(NaiveDate),
    Timestamp(EventTimestamp),
}

/// A finished statement and its arguments in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// A `SELECT` whose `WHERE` clause is assembled from optional predicates.
#[derive(Debug)]
pub struct FilteredSelect {
    head: String,
    conditions: Vec<String>,
    binds: Vec<BindValue>,
}

impl FilteredSelect {
    /// Start from `SELECT {columns} {from}` with no conditions.
    pub fn new(columns: &str, from: &'static str) -> Self {
        Self {
            head: format!("SELECT {columns} {from}"),
            conditions: Vec::new(),
            binds: Vec::new(),
        }
    }

    /// Add a condition that takes no argument.
    pub fn require(mut self, condition: &'static str) -> Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// `{column} = $n`
    pub fn eq_id(self, column: &'static str, value: DbId) -> Self {
        self.push(|n| format!("{column} = ${n}"), BindValue::BigInt(value))
    }

    /// `{column}::date = $n` -- matches the calendar date of a timestamp.
    pub fn on_date(self, column: &'static str, value: NaiveDate) -> Self {
        self.push(|n| format!("{column}::date = ${n}"), BindValue::Date(value))
    }

    /// `{column} >= $n`
    pub fn at_or_after(self, column: &'static str, value: EventTimestamp) -> Self {
        self.push(|n| format!("{column} >= ${n}"), BindValue::Timestamp(value))
    }

    /// `{column} ILIKE $n` with `%needle%`; wildcard characters in the
    /// needle are escaped so it matches literally.
    pub fn contains_ignore_case(self, column: &'static str, needle: &str) -> Self {
        let pattern = format!("%{}%", escape_like(needle));
        self.push(|n| format!("{column} ILIKE ${n}"), BindValue::Text(pattern))
    }

    /// Render the statement, appending `ORDER BY {order_by}`.
    pub fn finish(self, order_by: &'static str) -> BuiltQuery {
        let mut sql = self.head;
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(order_by);

        BuiltQuery {
            sql,
            binds: self.binds,
        }
    }

    fn push(mut self, render: impl FnOnce(usize) -> String, value: BindValue) -> Self {
        let placeholder = self.binds.len() + 1;
        self.conditions.push(render(placeholder));
        self.binds.push(value);
        self
    }
}

/// Escape `\`, `%` and `_` for a `LIKE` pattern using the default escape character.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Date(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Event listings
// ---------------------------------------------------------------------------

/// Optional search filters. `None` contributes no predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub category_id: Option<DbId>,
}

fn active_events() -> FilteredSelect {
    let columns = format!("{EVENT_COLUMNS}, c.category_name, o.organization_name");
    FilteredSelect::new(&columns, EVENT_JOINS).require("e.is_active = true")
}

/// Active events matching every supplied filter, earliest first.
///
/// Predicates are added in a fixed order: date, location, category.
pub fn search_events(filter: &EventFilter) -> BuiltQuery {
    let mut select = active_events();

    if let Some(date) = filter.date {
        select = select.on_date("e.event_date", date);
    }
    if let Some(location) = filter.location.as_deref() {
        select = select.contains_ignore_case("e.event_location", location);
    }
    if let Some(category_id) = filter.category_id {
        select = select.eq_id("e.category_id", category_id);
    }

    select.finish(EVENT_LIST_ORDER)
}

/// Active events dated at or after `now`, earliest first.
pub fn upcoming_events(now: EventTimestamp) -> BuiltQuery {
    active_events()
        .at_or_after("e.event_date", now)
        .finish(EVENT_LIST_ORDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn no_filters_lists_all_active_events() {
        let q = search_events(&EventFilter::default());
        assert!(q.binds.is_empty());
        assert!(q.sql.contains("WHERE e.is_active = true ORDER BY"));
        assert!(!q.sql.contains('$'));
        assert!(q.sql.ends_with("ORDER BY e.event_date ASC, e.event_id ASC"));
    }

    #[test]
    fn all_filters_in_fixed_order_joined_by_and() {
        let q = search_events(&EventFilter {
            date: Some(date("2030-01-01")),
            location: Some("Hall".into()),
            category_id: Some(4),
        });

        assert!(q.sql.contains(
            "WHERE e.is_active = true \
             AND e.event_date::date = $1 \
             AND e.event_location ILIKE $2 \
             AND e.category_id = $3 ORDER BY"
        ));
        assert!(!q.sql.contains(" OR "));
        assert_eq!(
            q.binds,
            vec![
                BindValue::Date(date("2030-01-01")),
                BindValue::Text("%Hall%".into()),
                BindValue::BigInt(4),
            ]
        );
    }

    #[test]
    fn placeholders_follow_only_present_filters() {
        let q = search_events(&EventFilter {
            date: None,
            location: None,
            category_id: Some(2),
        });
        assert!(q.sql.contains("AND e.category_id = $1"));
        assert_eq!(q.binds, vec![BindValue::BigInt(2)]);

        let q = search_events(&EventFilter {
            date: Some(date("2030-05-05")),
            location: None,
            category_id: Some(2),
        });
        assert!(q.sql.contains("e.event_date::date = $1"));
        assert!(q.sql.contains("e.category_id = $2"));
    }

    #[test]
    fn request_values_never_reach_sql_text() {
        let hostile = "x'; DROP TABLE charity_events; --";
        let q = search_events(&EventFilter {
            location: Some(hostile.into()),
            ..Default::default()
        });
        assert!(!q.sql.contains("DROP TABLE"));
        assert_eq!(
            q.binds,
            vec![BindValue::Text(
                r"%x'; DROP TABLE charity\_events; --%".into()
            )]
        );
    }

    #[test]
    fn like_wildcards_are_escaped() {
        let q = search_events(&EventFilter {
            location: Some(r"50%_off\".into()),
            ..Default::default()
        });
        assert_eq!(q.binds, vec![BindValue::Text(r"%50\%\_off\\%".into())]);
    }

    #[test]
    fn upcoming_binds_now() {
        let now = date("2030-01-01").and_hms_opt(12, 0, 0).unwrap();
        let q = upcoming_events(now);
        assert!(q.sql.contains("e.is_active = true AND e.event_date >= $1"));
        assert_eq!(q.binds, vec![BindValue::Timestamp(now)]);
    }
}
