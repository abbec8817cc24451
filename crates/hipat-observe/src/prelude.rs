pub use crate::ctx::ObserveCtx;
pub use crate::model::{LogEvent, LogLevel, MetricKind, MetricSpec};
pub use crate::pipeline::{ContactRedactor, NoopRedactor, Redactor};
pub use crate::sdk::log::{LogBuilder, Logger, NoopLogger, TracingLogger};
pub use crate::sdk::metrics::{CounterHandle, GaugeHandle, Meter, MeterRegistry, NoopMeter};
