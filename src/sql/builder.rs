//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the fixed tables.

use serde_json::Value;

/// Static description of one table. Column names never come from request input.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    /// Columns the UPDATE builder may assign, in statement order.
    pub updatable: &'static [&'static str],
    /// Present on tables that track modification time.
    pub touch_column: Option<&'static str>,
}

pub const GUESTS: Table = Table {
    name: "guests",
    columns: &["id", "name", "email", "phone", "status", "created_at", "updated_at"],
    updatable: &["name", "email", "phone", "status"],
    touch_column: Some("updated_at"),
};

pub const COMMENTS: Table = Table {
    name: "comments",
    columns: &["id", "name", "message", "is_present", "created_at"],
    updatable: &[],
    touch_column: None,
};

/// Quote identifier for MySQL.
fn quoted(s: &str) -> String {
    format!("`{}`", s.replace('`', "``"))
}

fn column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) {
        self.params.push(v);
    }
}

/// Whole table, newest first. Rows created within the same second fall back to id order.
pub fn select_list(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {} DESC, {} DESC",
        column_list(table),
        quoted(table.name),
        quoted("created_at"),
        quoted("id")
    );
    q
}

/// SELECT by primary key. The id is bound verbatim; the store decides whether it matches.
pub fn select_by_id(table: &Table, id: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Value::String(id.to_string()));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(table),
        quoted(table.name),
        quoted("id")
    );
    q
}

/// INSERT of the given (column, value) pairs. Unknown columns are skipped.
pub fn insert(table: &Table, values: &[(&str, Value)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    for (col, val) in values {
        if *col == "id" || !table.columns.iter().any(|c| c == col) {
            continue;
        }
        cols.push(quoted(col));
        q.push_param(val.clone());
    }
    let placeholders = vec!["?"; cols.len()].join(", ");
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        cols.join(", "),
        placeholders
    );
    q
}

/// UPDATE by id: SET only the assignments whose column is updatable on this table.
/// Returns None when nothing is left to assign.
pub fn update(table: &Table, assignments: &[(&str, Value)], id: &str) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for col in table.updatable {
        let Some((_, val)) = assignments.iter().find(|(c, _)| c == col) else {
            continue;
        };
        sets.push(format!("{} = ?", quoted(col)));
        q.push_param(val.clone());
    }
    if sets.is_empty() {
        return None;
    }
    if let Some(touch) = table.touch_column {
        sets.push(format!("{} = CURRENT_TIMESTAMP", quoted(touch)));
    }
    q.push_param(Value::String(id.to_string()));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quoted(table.name),
        sets.join(", "),
        quoted("id")
    );
    Some(q)
}

/// DELETE by id.
pub fn delete(table: &Table, id: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Value::String(id.to_string()));
    q.sql = format!("DELETE FROM {} WHERE {} = ?", quoted(table.name), quoted("id"));
    q
}
