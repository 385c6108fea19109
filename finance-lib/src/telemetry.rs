use crate::config::TelemetryConfig;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::Error;
use anyhow::Context;
use opentelemetry::sdk::trace::Tracer;
use opentelemetry::sdk::Resource;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use tonic::metadata::{Ascii, MetadataKey, MetadataMap, MetadataValue};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder, TracingLogger};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::registry::LookupSpan;

/// Root span for every request. Handlers that target a single transaction
/// fill in `transaction_id`.
pub struct FinanceRootSpanBuilder;

impl RootSpanBuilder for FinanceRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        tracing_actix_web::root_span!(request, transaction_id = tracing::field::Empty)
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

pub fn create_middleware() -> TracingLogger<FinanceRootSpanBuilder> {
    TracingLogger::<FinanceRootSpanBuilder>::new()
}

pub fn create_opentelemetry_layer<S>(
    service_name: &'static str,
    config: &TelemetryConfig,
) -> Result<OpenTelemetryLayer<S, Tracer>, anyhow::Error>
where
    S: tracing::Subscriber + for<'span> LookupSpan<'span>,
{
    let mut metadata_map = MetadataMap::with_capacity(config.headers.len());
    for (key, value) in &config.headers {
        let metadata_key = MetadataKey::<Ascii>::from_bytes(key.as_bytes())
            .with_context(|| format!("Invalid telemetry header name: {}", key))?;
        let metadata_value = value
            .parse::<MetadataValue<Ascii>>()
            .with_context(|| format!("Invalid value for telemetry header {}", key))?;
        metadata_map.insert(metadata_key, metadata_value);
    }

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(config.endpoint.as_str())
        .with_metadata(metadata_map);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_trace_config(
            opentelemetry::sdk::trace::config().with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                service_name,
            )])),
        )
        .with_exporter(exporter)
        .install_simple()
        .context("Unable to create tracer")?;
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    Ok(telemetry_layer)
}
