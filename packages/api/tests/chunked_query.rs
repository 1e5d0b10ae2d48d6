//! Fluent query builder against in-memory chunked responses

use std::io;

use chunkseries::{
    Bytes, ChunkedQuery, HeaderValue, HttpResponse, Precision, ReaderConfig, ResponseBody,
    StatusCode, Url, Value, header,
};

const CPU: &str = r#"{"name":"cpu","columns":["time","sequence_number","usage"],"points":[[10,1,0.5],[20,2,0.75]]}"#;
const MEM: &str = r#"{"name":"mem","columns":["time","sequence_number","free"],"points":[[10,3,256.5]]}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn response(input: &str) -> HttpResponse {
    let chunks: Vec<io::Result<Bytes>> = input
        .as_bytes()
        .chunks(16)
        .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
        .collect();
    let url = Url::parse("http://localhost:8086/db/metrics/series").expect("valid url");
    HttpResponse::new(url, StatusCode::OK, ResponseBody::from_chunks("application/json", chunks))
        .with_header(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"))
}

#[test]
fn test_collect_all_series() -> chunkseries::Result<()> {
    init_logging();
    let series = ChunkedQuery::new("metrics", "select * from cpu, mem")
        .collect(response(&format!("{CPU}\n{MEM}\n")))?;

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name(), "cpu");
    assert_eq!(series[1].value(0, "free"), Some(&Value::Float(256.5)));

    let encoded = serde_json::to_string(&series[0]).expect("series serialises");
    assert_eq!(encoded, CPU);
    Ok(())
}

#[test]
fn test_open_carries_query_description() -> chunkseries::Result<()> {
    init_logging();
    let mut reader = chunkseries::query("metrics", "select * from cpu")
        .precision(Precision::Microseconds)
        .started_at(1_453_521_282_000)
        .open(response(CPU))?;

    assert_eq!(reader.database(), "metrics");
    assert_eq!(reader.query(), "select * from cpu");
    assert_eq!(reader.precision(), Precision::Microseconds);
    assert_eq!(reader.query_start_time(), 1_453_521_282_000);

    assert!(reader.next_record()?.is_some());
    assert!(reader.next_record()?.is_none());
    assert!(reader.is_end_of_stream());
    Ok(())
}

#[test]
fn test_default_start_time_is_now() -> chunkseries::Result<()> {
    let before = chrono::Utc::now().timestamp_millis();
    let reader = ChunkedQuery::new("metrics", "q").open(response(CPU))?;
    let after = chrono::Utc::now().timestamp_millis();

    assert!((before..=after).contains(&reader.query_start_time()));
    assert_eq!(reader.precision(), Precision::Milliseconds);
    Ok(())
}

#[test]
fn test_for_each_counts_series() -> chunkseries::Result<()> {
    let mut names = Vec::new();
    let count = ChunkedQuery::new("metrics", "q")
        .for_each(response(&format!("{CPU}{MEM}{CPU}")), |series| {
            names.push(series.name().to_string());
        })?;

    assert_eq!(count, 3);
    assert_eq!(names, ["cpu", "mem", "cpu"]);
    Ok(())
}

#[test]
fn test_collect_stops_at_malformed_series() {
    let err = ChunkedQuery::new("metrics", "q")
        .collect(response(&format!(r#"{CPU}{{"name":"mem","points":[]}}"#)))
        .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_custom_config_is_applied() -> chunkseries::Result<()> {
    let config = ReaderConfig::default()
        .with_integral_columns(1)
        .with_read_buffer_size(64);
    let series = ChunkedQuery::new("metrics", "q")
        .config(config)
        .collect(response(CPU))?;
    assert_eq!(series[0].rows()[0][0], Value::Integer(10));
    assert_eq!(series[0].rows()[0][1], Value::Float(1.0));
    Ok(())
}

#[test]
fn test_custom_mime_type() {
    let config = ReaderConfig::default().with_expected_mime_type("application/x-ndjson");
    let err = ChunkedQuery::new("metrics", "q")
        .config(config)
        .open(response(CPU))
        .unwrap_err();
    assert!(err.is_protocol_mismatch());
}
