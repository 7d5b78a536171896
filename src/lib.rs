//! # matchquery
//!
//! Predicate-based selection over match-result records.
//!
//! Records are loaded from comma-separated text whose first line names the
//! fields. Queries are lists of `(field, comparator, target)` conditions
//! combined with `all` (AND) or `any` (OR), built directly or compiled from
//! compound keys such as `home_team__eq` or `home_score__gt`. Selected
//! records can be chained through further queries and reduced to a goal
//! total for one team.
//!
//! ## Example
//!
//! ```
//! use matchquery::{QuerySpec, parse_records, select, sum_goals};
//!
//! let games = parse_records(
//!     "home_team,away_team,home_score,away_score\n\
//!      Italy,France,2,1\n\
//!      France,Italy,0,3\n",
//! );
//!
//! let query = QuerySpec::new()
//!     .with("mode", "or")
//!     .with("home_team__eq", "Italy")
//!     .with("away_team__eq", "Italy")
//!     .compile()
//!     .unwrap();
//!
//! let italy = select(games, &query);
//! assert_eq!(italy.len(), 2);
//! assert_eq!(sum_goals(&italy, "Italy").unwrap(), 5);
//! ```

pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod select;
pub mod source;
pub mod value;

pub use aggregate::{sum_goals, team_goals};
pub use error::{QueryError, Result};
pub use pipeline::Pipeline;
pub use query::{Comparator, Condition, Mode, Query, QuerySpec, compile_conditions, parse_key};
pub use record::Record;
pub use select::{matches, select, select_ref};
pub use source::{load_records, parse_records, split_row};
pub use value::Value;
