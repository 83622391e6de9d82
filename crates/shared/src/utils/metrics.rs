use prometheus_client::encoding::{EncodeLabelValue as EncodeLabelValueTrait, LabelValueEncoder};
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::fmt::Write;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Post,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

/// How the edge guard disposed of a request.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum GuardOutcome {
    Anonymous,
    Public,
    Pass,
    Redirect,
}

impl GuardOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardOutcome::Anonymous => "anonymous",
            GuardOutcome::Public => "public",
            GuardOutcome::Pass => "pass",
            GuardOutcome::Redirect => "redirect",
        }
    }
}

// exported label values are lowercase
impl EncodeLabelValueTrait for GuardOutcome {
    fn encode(&self, encoder: &mut LabelValueEncoder) -> Result<(), std::fmt::Error> {
        encoder.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct GuardLabels {
    pub outcome: GuardOutcome,
}

#[derive(Clone, Debug, Default)]
pub struct GuardMetrics {
    pub decisions: Family<GuardLabels, Counter>,
}

impl GuardMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "edge_guard_decisions",
            "Edge route guard decisions by outcome",
            self.decisions.clone(),
        );
    }

    pub fn record(&self, outcome: GuardOutcome) {
        self.decisions.get_or_create(&GuardLabels { outcome }).inc();
    }

    pub fn count(&self, outcome: GuardOutcome) -> u64 {
        self.decisions.get_or_create(&GuardLabels { outcome }).get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn guard_decisions_are_counted_per_outcome() {
        let metrics = GuardMetrics::new();
        metrics.record(GuardOutcome::Redirect);
        metrics.record(GuardOutcome::Redirect);
        metrics.record(GuardOutcome::Pass);

        assert_eq!(metrics.count(GuardOutcome::Redirect), 2);
        assert_eq!(metrics.count(GuardOutcome::Pass), 1);
        assert_eq!(metrics.count(GuardOutcome::Anonymous), 0);
    }

    #[test]
    fn registered_family_is_encoded() {
        let mut registry = Registry::default();
        let metrics = GuardMetrics::new();
        metrics.register(&mut registry);
        metrics.record(GuardOutcome::Public);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();
        assert!(buffer.contains("edge_guard_decisions_total{outcome=\"public\"} 1"), "{buffer}");
        assert!(!buffer.contains("Public"));
    }
}
