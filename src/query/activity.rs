//! Station activity ranking

use crate::query::error::{QueryError, QueryResult};
use crate::store::{Session, StationActivity};

/// All stations ranked by observation count, busiest first
///
/// Ties are broken by station code ascending. Fails with
/// [`QueryError::EmptyDataset`] when no observations exist.
pub fn station_ranking(session: &Session) -> QueryResult<Vec<StationActivity>> {
    let ranking = session.station_activity()?;
    if ranking.is_empty() {
        return Err(QueryError::EmptyDataset);
    }
    Ok(ranking)
}

/// Station with the most observations
pub fn most_active_station(session: &Session) -> QueryResult<String> {
    let busiest = station_ranking(session)?
        .into_iter()
        .next()
        .ok_or(QueryError::EmptyDataset)?;

    tracing::debug!(station = %busiest.station, count = busiest.count, "Resolved most active station");
    Ok(busiest.station)
}
