pub mod ctx;
pub mod model;
pub mod pipeline;
pub mod prelude;

pub mod sdk {
    pub mod log;
    pub mod metrics;

    pub use log::{LogBuilder, Logger, NoopLogger, TracingLogger};
    pub use metrics::{CounterHandle, GaugeHandle, Meter, MeterRegistry, NoopMeter};
}
