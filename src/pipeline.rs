//! Chained selection over materialized records.
//!
//! A pipeline starts from a record set, narrows it with one query stage at a
//! time, and ends in a result:
//!
//! ```
//! use matchquery::{Pipeline, Query, parse_records};
//!
//! let records = parse_records(
//!     "home_team,away_team,home_score,away_score,tournament\n\
//!      Italy,France,2,1,FIFA World Cup\n\
//!      France,Italy,0,3,Friendly\n",
//! );
//!
//! let goals = Pipeline::new(records)
//!     .select(&Query::any().eq("tournament", "FIFA World Cup"))
//!     .select(&Query::any().eq("home_team", "Italy").eq("away_team", "Italy"))
//!     .sum_goals("Italy")
//!     .unwrap();
//!
//! assert_eq!(goals, 2);
//! ```

use tracing::debug;

use crate::Record;
use crate::aggregate;
use crate::error::Result;
use crate::query::{Query, QuerySpec};
use crate::select;

/// A record set flowing through selection stages.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    records: Vec<Record>,
    stages: usize,
}

impl Pipeline {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records, stages: 0 }
    }

    /// Keep only the records matching `query`.
    pub fn select(self, query: &Query) -> Self {
        let input = self.records.len();
        let records = select::select(self.records, query);
        let stage = self.stages + 1;
        debug!(stage, %query, input, output = records.len(), "select");
        Self {
            records,
            stages: stage,
        }
    }

    /// Compile a compound-key spec and select with it.
    pub fn select_spec(self, spec: QuerySpec) -> Result<Self> {
        let query = spec.compile()?;
        Ok(self.select(&query))
    }

    /// Number of selection stages applied so far.
    pub fn stages(&self) -> usize {
        self.stages
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Total goals `team` scored across the remaining records.
    pub fn sum_goals(&self, team: &str) -> Result<i64> {
        aggregate::sum_goals(&self.records, team)
    }
}

impl From<Vec<Record>> for Pipeline {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::source::parse_records;

    const INPUT: &str = "home_team,away_team,home_score,away_score,tournament
Italy,France,2,1,FIFA World Cup
France,Italy,0,3,FIFA World Cup
Italy,Spain,4,0,Friendly
";

    #[test]
    fn test_two_stage_sum() {
        let pipeline = Pipeline::new(parse_records(INPUT))
            .select_spec(QuerySpec::new().with("tournament__eq", "FIFA World Cup"))
            .unwrap()
            .select_spec(
                QuerySpec::new()
                    .with("mode", "or")
                    .with("home_team__eq", "Italy")
                    .with("away_team__eq", "Italy"),
            )
            .unwrap();
        assert_eq!(pipeline.stages(), 2);
        assert_eq!(pipeline.count(), 2);
        assert_eq!(pipeline.sum_goals("Italy").unwrap(), 5);
    }

    #[test]
    fn test_no_stages_sums_everything() {
        let pipeline = Pipeline::from(parse_records(INPUT));
        assert_eq!(pipeline.stages(), 0);
        assert_eq!(pipeline.sum_goals("Italy").unwrap(), 9);
    }

    #[test]
    fn test_invalid_spec_stops_pipeline() {
        let result =
            Pipeline::new(parse_records(INPUT)).select_spec(QuerySpec::new().with("x__approx", 1));
        assert!(matches!(result, Err(QueryError::InvalidOperator { .. })));
    }

    #[test]
    fn test_into_records_keeps_order() {
        let records = Pipeline::new(parse_records(INPUT))
            .select(&Query::any().eq("home_team", "Italy"))
            .into_records();
        let aways: Vec<_> = records.iter().map(|r| r.get("away_team")).collect();
        assert_eq!(aways, vec![Some("France"), Some("Spain")]);
    }
}
