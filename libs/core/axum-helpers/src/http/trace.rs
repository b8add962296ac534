use tower_http::LatencyUnit;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, HttpMakeClassifier, TraceLayer,
};
use tracing::Level;

/// Request logging stage.
///
/// Opens an INFO span per request carrying method, URI and version, logs when
/// the request starts and logs status and latency (ms) when the response is
/// produced. Server errors are additionally reported as failures. The request
/// itself is never altered.
pub fn request_logging_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
