use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::model::MetricSpec;

pub trait Meter: Send + Sync {
    fn counter(&self, spec: &'static MetricSpec) -> CounterHandle;
    fn gauge(&self, spec: &'static MetricSpec) -> GaugeHandle;
}

#[derive(Clone, Default)]
pub struct MeterRegistry {
    inner: Arc<Mutex<HashMap<&'static str, Arc<AtomicU64>>>>,
}

impl MeterRegistry {
    fn entry(&self, spec: &'static MetricSpec) -> Arc<AtomicU64> {
        let mut guard = self.inner.lock();
        guard
            .entry(spec.name)
            .or_insert_with(|| Arc::new(AtomicU64::new(0)))
            .clone()
    }

    /// Current value of a metric; mainly for assertions in tests.
    pub fn snapshot(&self, spec: &'static MetricSpec) -> u64 {
        self.entry(spec).load(Ordering::Relaxed)
    }
}

impl Meter for MeterRegistry {
    fn counter(&self, spec: &'static MetricSpec) -> CounterHandle {
        CounterHandle::new(self.entry(spec))
    }

    fn gauge(&self, spec: &'static MetricSpec) -> GaugeHandle {
        GaugeHandle::new(self.entry(spec))
    }
}

#[derive(Clone)]
pub struct CounterHandle {
    storage: Arc<AtomicU64>,
}

impl CounterHandle {
    pub fn new(storage: Arc<AtomicU64>) -> Self {
        Self { storage }
    }

    pub fn inc(&self, value: u64) {
        self.storage.fetch_add(value, Ordering::Relaxed);
    }
}

impl Default for CounterHandle {
    fn default() -> Self {
        Self::new(Arc::new(AtomicU64::new(0)))
    }
}

#[derive(Clone)]
pub struct GaugeHandle {
    storage: Arc<AtomicU64>,
}

impl GaugeHandle {
    pub fn new(storage: Arc<AtomicU64>) -> Self {
        Self { storage }
    }

    pub fn set(&self, value: u64) {
        self.storage.store(value, Ordering::Relaxed);
    }
}

impl Default for GaugeHandle {
    fn default() -> Self {
        Self::new(Arc::new(AtomicU64::new(0)))
    }
}

#[derive(Default)]
pub struct NoopMeter;

impl Meter for NoopMeter {
    fn counter(&self, _spec: &'static MetricSpec) -> CounterHandle {
        CounterHandle::default()
    }

    fn gauge(&self, _spec: &'static MetricSpec) -> GaugeHandle {
        GaugeHandle::default()
    }
}
