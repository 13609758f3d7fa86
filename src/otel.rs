use anyhow::Context;
use opentelemetry::{KeyValue, global};
use opentelemetry_otlp::{MetricExporter, SpanExporter};
use opentelemetry_sdk::{Resource, metrics::SdkMeterProvider, trace::SdkTracerProvider};

/// OTLP tracer and meter providers for one service instance.
pub struct Providers {
    pub tracer: SdkTracerProvider,
    pub meter: SdkMeterProvider,
}

impl Providers {
    /// Builds both exporters against the endpoint named by the standard
    /// `OTEL_EXPORTER_OTLP_*` variables and registers them globally, so
    /// `global::meter` hands out exporting instruments from here on.
    pub fn install(service_name: &str) -> anyhow::Result<Self> {
        let resource = resource(service_name);

        let tracer = SdkTracerProvider::builder()
            .with_batch_exporter(
                SpanExporter::builder()
                    .with_tonic()
                    .build()
                    .context("Failed to create OTLP span exporter")?,
            )
            .with_resource(resource.clone())
            .build();

        let meter = SdkMeterProvider::builder()
            .with_periodic_exporter(
                MetricExporter::builder()
                    .with_tonic()
                    .build()
                    .context("Failed to create OTLP metric exporter")?,
            )
            .with_resource(resource)
            .build();

        global::set_tracer_provider(tracer.clone());
        global::set_meter_provider(meter.clone());

        Ok(Self { tracer, meter })
    }

    /// Flushes buffered spans and metrics. Failures are logged, not returned,
    /// since this only runs on the way out.
    pub fn shutdown(&self) {
        if let Err(err) = self.tracer.shutdown() {
            tracing::warn!(error = %err, "Failed to flush spans");
        }
        if let Err(err) = self.meter.shutdown() {
            tracing::warn!(error = %err, "Failed to flush metrics");
        }
    }
}

fn resource(service_name: &str) -> Resource {
    Resource::builder()
        .with_service_name(service_name.to_owned())
        .with_attribute(KeyValue::new("service.version", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::{Key, Value};

    #[test]
    fn resource_identifies_service_and_version() {
        let resource = resource("customers");

        assert_eq!(
            resource.get(&Key::from_static_str("service.name")),
            Some(Value::from("customers"))
        );
        assert_eq!(
            resource.get(&Key::from_static_str("service.version")),
            Some(Value::from(env!("CARGO_PKG_VERSION")))
        );
    }
}
