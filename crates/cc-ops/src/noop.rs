//! Built-in `PortOperations` implementations.

use crate::{DayContext, PortOperations};

/// Logs each hook at `debug` level and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingOperations;

impl PortOperations for LoggingOperations {}

/// Silent placeholder for hosts and tests without port logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperations;

impl PortOperations for NoopOperations {
    fn adjust_production_rates(&mut self, _ctx: &DayContext<'_>) {}

    fn process_port_operations(&mut self, _ctx: &DayContext<'_>) {}
}
