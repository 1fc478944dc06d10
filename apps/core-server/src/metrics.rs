use std::sync::OnceLock;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

// creates the custom registry and registers the custom metrics
pub fn setup() -> Result<(), prometheus::Error> {
    let registry = registry();
    registry.register(Box::new(incoming_requests_counter().clone()))?;
    registry.register(Box::new(response_time_hist().clone()))?;
    registry.register(Box::new(cache_invalidations_counter().clone()))?;

    Ok(())
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();

    REGISTRY.get_or_init(Registry::new)
}

fn incoming_requests_counter() -> &'static IntCounter {
    static INCOMING_REQUESTS: OnceLock<IntCounter> = OnceLock::new();

    INCOMING_REQUESTS.get_or_init(|| {
        IntCounter::new("incoming_requests", "Incoming Requests").expect("failed to create metric")
    })
}

fn response_time_hist() -> &'static HistogramVec {
    static RESPONSE_TIME_COLLECTOR: OnceLock<HistogramVec> = OnceLock::new();

    RESPONSE_TIME_COLLECTOR.get_or_init(|| {
        HistogramVec::new(
            HistogramOpts::new("response_time", "Response Times"),
            &["status"],
        )
        .expect("failed to create metric")
    })
}

fn cache_invalidations_counter() -> &'static IntCounterVec {
    static CACHE_INVALIDATIONS: OnceLock<IntCounterVec> = OnceLock::new();

    CACHE_INVALIDATIONS.get_or_init(|| {
        IntCounterVec::new(
            Opts::new("cache_invalidations", "Invalidated cache paths"),
            &["kind"],
        )
        .expect("failed to create metric")
    })
}

pub(crate) fn track_request_count_and_time(status: u16, response_time: f64) {
    incoming_requests_counter().inc();

    response_time_hist()
        .with_label_values(&[&status.to_string()])
        .observe(response_time);
}

pub(crate) fn track_cache_invalidation(kind: &str) {
    cache_invalidations_counter()
        .with_label_values(&[kind])
        .inc();
}

pub(crate) fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = prometheus::TextEncoder::new();
    let mut metrics = String::new();

    encoder.encode_utf8(&registry().gather(), &mut metrics)?;
    encoder.encode_utf8(&prometheus::gather(), &mut metrics)?;

    Ok(metrics)
}
