//! Query model and the compound-key predicate compiler.
//!
//! A [`Query`] is a combination [`Mode`] plus an ordered list of
//! [`Condition`]s. Queries are built directly:
//!
//! ```
//! use matchquery::{Comparator, Query};
//!
//! let query = Query::all()
//!     .eq("tournament", "FIFA World Cup")
//!     .filter("home_score", Comparator::Ge, 3);
//! assert_eq!(query.conditions().len(), 2);
//! ```
//!
//! or compiled from a [`QuerySpec`] written in the compound-key form:
//! ```text
//! home_team__eq = "Italy"
//! home_score__gt = 2
//! tournament = "Friendly"        # no comparator: eq
//! mode = "or"                    # reserved key: all/and or any/or
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{QueryError, Result};
use crate::value::Value;

/// Separator between a field name and its comparator in a compound key.
pub const SEPARATOR: &str = "__";

/// Reserved query key that selects the combination mode.
pub const MODE_KEY: &str = "mode";

/// Comparison between a record value (left) and a target (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
}

impl Comparator {
    pub const ALL: [Comparator; 6] = [
        Comparator::Lt,
        Comparator::Le,
        Comparator::Eq,
        Comparator::Ne,
        Comparator::Ge,
        Comparator::Gt,
    ];

    /// The token used in compound keys.
    pub fn token(self) -> &'static str {
        match self {
            Comparator::Lt => "lt",
            Comparator::Le => "le",
            Comparator::Eq => "eq",
            Comparator::Ne => "ne",
            Comparator::Ge => "ge",
            Comparator::Gt => "gt",
        }
    }

    /// Does an ordering of left against right satisfy this comparator?
    ///
    /// `None` means the operands could not be ordered; only `Ne` holds then.
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        match self {
            Comparator::Lt => ordering == Some(Ordering::Less),
            Comparator::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Comparator::Eq => ordering == Some(Ordering::Equal),
            Comparator::Ne => ordering != Some(Ordering::Equal),
            Comparator::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Comparator::Gt => ordering == Some(Ordering::Greater),
        }
    }

    /// Compare a record value against a target.
    pub fn apply(self, field: Option<&str>, target: &Value) -> bool {
        self.holds(target.compare_field(field))
    }
}

impl FromStr for Comparator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        Comparator::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| QueryError::invalid_operator(s, s))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// How a record's condition results are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every condition must hold (AND).
    All,
    /// At least one condition must hold (OR).
    #[default]
    Any,
}

impl FromStr for Mode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(Mode::All),
            "any" | "or" => Ok(Mode::Any),
            _ => Err(QueryError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::All => f.write_str("all"),
            Mode::Any => f.write_str("any"),
        }
    }
}

/// A compiled comparison triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub comparator: Comparator,
    pub field: String,
    pub target: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, comparator: Comparator, target: impl Into<Value>) -> Self {
        Self {
            comparator,
            field: field.into(),
            target: target.into(),
        }
    }

    /// Evaluate against a record's value for this condition's field.
    pub fn test(&self, value: Option<&str>) -> bool {
        self.comparator.apply(value, &self.target)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.comparator, self.target)
    }
}

/// A compiled query: combination mode and ordered conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    mode: Mode,
    conditions: Vec<Condition>,
}

impl Query {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            conditions: Vec::new(),
        }
    }

    /// Query whose conditions must all hold.
    pub fn all() -> Self {
        Self::new(Mode::All)
    }

    /// Query where any single condition suffices.
    pub fn any() -> Self {
        Self::new(Mode::Any)
    }

    /// Add a condition.
    pub fn filter(
        mut self,
        field: impl Into<String>,
        comparator: Comparator,
        target: impl Into<Value>,
    ) -> Self {
        self.conditions.push(Condition::new(field, comparator, target));
        self
    }

    /// Add an equality condition.
    pub fn eq(self, field: impl Into<String>, target: impl Into<Value>) -> Self {
        self.filter(field, Comparator::Eq, target)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.mode)?;
        for (i, c) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}

/// Split a compound key into field name and comparator.
///
/// `field` alone means equality. More than one separator, an empty field, or
/// an unknown comparator token is an `InvalidOperator` error.
pub fn parse_key(key: &str) -> Result<(&str, Comparator)> {
    let mut parts = key.split(SEPARATOR);
    let field = parts.next().unwrap_or_default();
    let comparator = match (parts.next(), parts.next()) {
        (None, _) => Comparator::Eq,
        (Some(token), None) => token.parse::<Comparator>().map_err(|e| e.in_key(key))?,
        (Some(_), Some(_)) => {
            let token = &key[field.len() + SEPARATOR.len()..];
            return Err(QueryError::invalid_operator(key, token));
        }
    };
    if field.is_empty() {
        return Err(QueryError::invalid_operator(key, comparator.token()));
    }
    Ok((field, comparator))
}

/// Compile `(compound key, target)` entries into conditions, in order.
///
/// Fails on the first bad key; no partial list is returned.
pub fn compile_conditions<'a, I>(entries: I) -> Result<Vec<Condition>>
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    entries
        .into_iter()
        .map(|(key, target)| {
            let (field, comparator) = parse_key(key)?;
            Ok(Condition::new(field, comparator, target.clone()))
        })
        .collect()
}

/// A query in compound-key form, with insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    entries: Vec<(String, Value)>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `target`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, target: impl Into<Value>) {
        let key = key.into();
        let target = target.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((key, target)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, target: impl Into<Value>) -> Self {
        self.insert(key, target);
        self
    }

    /// Add an entry from `key=value` text; the value goes through [`Value::infer`].
    pub fn parse_pair(&mut self, pair: &str) -> Result<()> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| QueryError::InvalidPair(pair.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(QueryError::InvalidPair(pair.to_string()));
        }
        self.insert(key, Value::infer(value.trim()));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Remove and return the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Pull out the reserved `mode` key (default `any`) and compile the rest.
    pub fn compile(mut self) -> Result<Query> {
        let mode = match self.remove(MODE_KEY) {
            None => Mode::default(),
            Some(Value::Text(s)) => s.parse::<Mode>()?,
            Some(other) => return Err(QueryError::InvalidMode(other.to_string())),
        };
        let conditions = compile_conditions(self.entries())?;
        let query = Query { mode, conditions };
        debug!(%query, "compiled query");
        Ok(query)
    }
}

impl<K, V> FromIterator<(K, V)> for QuerySpec
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut spec = QuerySpec::new();
        for (k, v) in iter {
            spec.insert(k, v);
        }
        spec
    }
}
