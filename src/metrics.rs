use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Histogram, register_counter, register_counter_vec, register_histogram,
};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("generate_requests_total", "Total number of generate requests").unwrap();
    pub static ref REQUEST_FAILURES: CounterVec = register_counter_vec!(
        "generate_failures_total",
        "Failed generate requests by kind",
        &["kind"]
    )
    .unwrap();
    pub static ref CREDENTIAL_FALLBACKS: CounterVec = register_counter_vec!(
        "credential_fallbacks_total",
        "Calls replayed with the backup credential after a quota error",
        &["backend"]
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "generate_request_latency_seconds",
        "End to end generate latency in seconds"
    )
    .unwrap();
}
