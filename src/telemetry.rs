use opentelemetry::trace::TracerProvider;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{config::Config, otel};

/// Installs the global subscriber and, when OTLP export is configured, the
/// global tracer and meter providers. The returned providers must be shut down
/// before exit so buffered telemetry is flushed.
pub fn init_telemetry(config: &Config) -> anyhow::Result<Option<otel::Providers>> {
    let providers = if config.otlp_enabled {
        Some(otel::Providers::install(&config.service_name)?)
    } else {
        None
    };

    let otel_layer = providers.as_ref().map(|providers| {
        let tracer = providers.tracer.tracer(config.service_name.clone());
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let fmt_layer = tracing_subscriber::fmt::layer().with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    Ok(providers)
}
