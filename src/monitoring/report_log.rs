use crate::data_structures::{CollisionReport, Route};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `start,end,count` rows, one per unsafe route.
pub fn write_unsafe_routes_csv<W: Write>(
    writer: W,
    report: &CollisionReport,
) -> Result<(), Box<dyn Error>> {
    write_records(writer, &report.records())
}

/// Writes `start,end` rows, e.g. for safe candidates.
pub fn write_routes_csv<W: Write>(writer: W, routes: &[Route]) -> Result<(), Box<dyn Error>> {
    write_records(writer, routes)
}

/// Generic helper to write records to a CSV file, replacing any earlier report.
pub fn log_to_csv<P: AsRef<Path>, T: Serialize>(
    path: P,
    records: &[T],
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_records(file, records)
}

fn write_records<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::UnsafeRouteRecord;

    #[test]
    fn unsafe_routes_have_header_and_counts() {
        let mut report = CollisionReport::default();
        report.record(Route::new(0, 2), Route::new(3, 1));
        let mut buf: Vec<u8> = Vec::new();
        write_unsafe_routes_csv(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "start,end,count\n0,2,1\n3,1,1\n");
    }

    #[test]
    fn csv_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unsafe.csv");
        let records = vec![UnsafeRouteRecord {
            start: 1,
            end: 0,
            count: 3,
        }];
        log_to_csv(&path, &records).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let read: Vec<UnsafeRouteRecord> = rdr
            .deserialize::<UnsafeRouteRecord>()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn empty_route_list_writes_nothing() {
        let mut buf: Vec<u8> = Vec::new();
        write_routes_csv(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
