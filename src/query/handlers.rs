//! Climate query handlers
//!
//! Each handler runs against one open [`Session`] so that all of its
//! reads see the same store content.

use crate::query::activity::{most_active_station, station_ranking};
use crate::query::error::QueryResult;
use crate::query::window::resolve_date_window;
use crate::store::{ObservationFilter, Session, StationActivity, TemperatureStats};
use chrono::NaiveDate;
use serde::Serialize;

/// One day's precipitation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: f64,
}

/// One day's temperature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub date: String,
    pub temp: f64,
}

/// Precipitation over the most recent year, skipping days without a value
pub fn precipitation(session: &Session) -> QueryResult<Vec<PrecipitationReading>> {
    let window = resolve_date_window(session)?;
    let filter = ObservationFilter::new()
        .since(window.start)
        .with_precipitation();

    let readings = session
        .observations(&filter)?
        .into_iter()
        .filter_map(|o| {
            o.precipitation.map(|prcp| PrecipitationReading { date: o.date, prcp })
        })
        .collect();

    Ok(readings)
}

/// Every station ranked by observation count over the whole history
pub fn stations(session: &Session) -> QueryResult<Vec<StationActivity>> {
    station_ranking(session)
}

/// Last year of temperature readings at the most active station
pub fn tobs(session: &Session) -> QueryResult<Vec<TemperatureReading>> {
    let station = most_active_station(session)?;
    let window = resolve_date_window(session)?;
    let filter = ObservationFilter::new().since(window.start).station(station);

    let readings = session
        .observations(&filter)?
        .into_iter()
        .map(|o| TemperatureReading {
            date: o.date,
            temp: o.temperature,
        })
        .collect();

    Ok(readings)
}

/// Min/avg/max temperature from `start` onwards, optionally up to `end`
///
/// Both bounds are inclusive. `None` means no observation matched,
/// which includes every `start > end` range.
pub fn temperature_stats(
    session: &Session,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> QueryResult<Option<TemperatureStats>> {
    let mut filter = ObservationFilter::new().since(start);
    if let Some(end) = end {
        filter = filter.until(end);
    }

    Ok(session.temperature_stats(&filter)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::error::QueryError;
    use crate::store::testing::{create_fixture, obs};
    use crate::store::DATE_FORMAT;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_precipitation_last_year_only() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2017-08-23", Some(0.0), 81.0),
            obs("S2", "2016-08-23", Some(1.2), 77.0),
        ]);
        let session = store.open_session().unwrap();

        let readings = precipitation(&session).unwrap();
        assert_eq!(
            readings,
            vec![PrecipitationReading {
                date: "2017-08-23".to_string(),
                prcp: 0.0
            }]
        );
    }

    #[test]
    fn test_precipitation_skips_missing_values() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2017-08-20", None, 80.0),
            obs("S1", "2017-08-21", Some(0.02), 79.0),
            obs("S2", "2017-08-21", None, 78.0),
            obs("S2", "2017-08-23", Some(0.45), 82.0),
        ]);
        let session = store.open_session().unwrap();

        let readings = precipitation(&session).unwrap();
        let dates: Vec<&str> = readings.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2017-08-21", "2017-08-23"]);
    }

    #[test]
    fn test_precipitation_empty_when_window_has_no_values() {
        let (_dir, store) = create_fixture(&[obs("S1", "2017-08-23", None, 80.0)]);
        let session = store.open_session().unwrap();

        assert!(precipitation(&session).unwrap().is_empty());
    }

    #[test]
    fn test_stations_ranking() {
        let mut fixture = Vec::new();
        for _ in 0..5 {
            fixture.push(obs("S2", "2017-01-01", None, 70.0));
        }
        for _ in 0..10 {
            fixture.push(obs("S1", "2017-01-02", None, 70.0));
        }
        let (_dir, store) = create_fixture(&fixture);
        let session = store.open_session().unwrap();

        assert_eq!(
            stations(&session).unwrap(),
            vec![
                StationActivity {
                    station: "S1".to_string(),
                    count: 10
                },
                StationActivity {
                    station: "S2".to_string(),
                    count: 5
                },
            ]
        );
    }

    #[test]
    fn test_tobs_busiest_station_last_year() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2015-01-01", None, 60.0),
            obs("S1", "2015-01-02", None, 61.0),
            obs("S1", "2017-01-01", None, 66.0),
            obs("S2", "2017-08-23", None, 80.0),
            obs("S1", "2017-08-22", None, 79.0),
        ]);
        let session = store.open_session().unwrap();

        let readings = tobs(&session).unwrap();
        assert_eq!(
            readings,
            vec![
                TemperatureReading {
                    date: "2017-01-01".to_string(),
                    temp: 66.0
                },
                TemperatureReading {
                    date: "2017-08-22".to_string(),
                    temp: 79.0
                },
            ]
        );
    }

    #[test]
    fn test_tobs_busiest_station_without_recent_readings() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2010-01-01", None, 60.0),
            obs("S1", "2010-01-02", None, 61.0),
            obs("S2", "2017-08-23", None, 80.0),
        ]);
        let session = store.open_session().unwrap();

        assert!(tobs(&session).unwrap().is_empty());
    }

    #[test]
    fn test_handlers_on_empty_store() {
        let (_dir, store) = create_fixture(&[]);
        let session = store.open_session().unwrap();

        assert!(matches!(precipitation(&session), Err(QueryError::EmptyDataset)));
        assert!(matches!(stations(&session), Err(QueryError::EmptyDataset)));
        assert!(matches!(tobs(&session), Err(QueryError::EmptyDataset)));
        assert_eq!(
            temperature_stats(&session, date("2017-01-01"), None).unwrap(),
            None
        );
    }

    #[test]
    fn test_temperature_stats_single_day() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2016-12-31", None, 60.0),
            obs("S1", "2017-01-01", None, 70.0),
            obs("S1", "2017-01-02", None, 75.0),
        ]);
        let session = store.open_session().unwrap();

        let day = date("2017-01-01");
        let stats = temperature_stats(&session, day, Some(day)).unwrap().unwrap();
        assert_eq!((stats.min, stats.avg, stats.max), (70.0, 70.0, 70.0));
    }

    #[test]
    fn test_temperature_stats_open_ended_and_ordered() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2016-12-31", None, 50.0),
            obs("S1", "2017-01-01", None, 62.0),
            obs("S2", "2017-03-01", None, 74.0),
            obs("S1", "2017-08-23", None, 83.0),
        ]);
        let session = store.open_session().unwrap();

        let stats = temperature_stats(&session, date("2017-01-01"), None)
            .unwrap()
            .unwrap();
        assert_eq!(stats.min, 62.0);
        assert_eq!(stats.max, 83.0);
        assert!((stats.avg - 73.0).abs() < 1e-9);
        assert!(stats.min <= stats.avg && stats.avg <= stats.max);
        assert_eq!(stats.samples, 3);
    }

    #[test]
    fn test_temperature_stats_no_data() {
        let (_dir, store) = create_fixture(&[obs("S1", "2017-08-23", None, 80.0)]);
        let session = store.open_session().unwrap();

        assert_eq!(
            temperature_stats(&session, date("2018-01-01"), None).unwrap(),
            None
        );
        assert_eq!(
            temperature_stats(&session, date("2017-09-01"), Some(date("2017-01-01"))).unwrap(),
            None
        );
    }

    #[test]
    fn test_handlers_are_idempotent() {
        let (_dir, store) = create_fixture(&[
            obs("S1", "2017-08-21", Some(0.1), 79.0),
            obs("S2", "2017-08-22", Some(0.2), 80.0),
            obs("S1", "2017-08-23", Some(0.3), 81.0),
        ]);
        let session = store.open_session().unwrap();

        assert_eq!(precipitation(&session).unwrap(), precipitation(&session).unwrap());
        assert_eq!(tobs(&session).unwrap(), tobs(&session).unwrap());
        assert_eq!(stations(&session).unwrap(), stations(&session).unwrap());
    }
}
