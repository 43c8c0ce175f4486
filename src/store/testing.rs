//! Throw-away SQLite fixtures for tests

use crate::store::WeatherStore;
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// One fixture row: (station, date, prcp, tobs)
pub type FixtureRow = (&'static str, &'static str, Option<f64>, f64);

pub fn obs(
    station: &'static str,
    date: &'static str,
    prcp: Option<f64>,
    tobs: f64,
) -> FixtureRow {
    (station, date, prcp, tobs)
}

/// Create a database with the `measurement` and `station` tables
///
/// Rows are inserted in slice order, so `id` follows the slice.
pub fn create_fixture(rows: &[FixtureRow]) -> (TempDir, WeatherStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hawaii.sqlite");

    let mut conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        );
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
            ('S1', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
            ('S2', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6);",
    )
    .unwrap();

    let tx = conn.transaction().unwrap();
    for (station, date, prcp, tobs) in rows {
        tx.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )
        .unwrap();
    }
    tx.commit().unwrap();

    (dir, WeatherStore::new(path))
}
