//! Goal totals over selected match records.

use crate::Record;
use crate::error::{QueryError, Result};

pub const HOME_TEAM: &str = "home_team";
pub const AWAY_TEAM: &str = "away_team";
pub const HOME_SCORE: &str = "home_score";
pub const AWAY_SCORE: &str = "away_score";

fn required<'a>(record: &'a Record, field: &str) -> Result<&'a str> {
    record
        .get(field)
        .ok_or_else(|| QueryError::missing_field(field))
}

/// Goals `team` scored in one match.
///
/// If `team` is the home side the home score counts, otherwise the away
/// score does. The score must parse as an integer.
pub fn team_goals(record: &Record, team: &str) -> Result<i64> {
    let field = if required(record, HOME_TEAM)? == team {
        HOME_SCORE
    } else {
        AWAY_SCORE
    };
    let value = required(record, field)?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| QueryError::bad_score(field, value, e))
}

/// Total goals `team` scored across `records`.
///
/// The first malformed record aborts the sum.
pub fn sum_goals<'a, I>(records: I, team: &str) -> Result<i64>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().try_fold(0i64, |total, record| {
        total
            .checked_add(team_goals(record, team)?)
            .ok_or_else(|| QueryError::Overflow {
                team: team.to_string(),
            })
    })
}
