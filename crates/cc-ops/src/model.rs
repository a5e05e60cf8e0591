//! The `PortOperations` trait: the extension point for economic rules.

use tracing::debug;

use crate::DayContext;

/// Daily production and port hooks.
///
/// Both methods default to a `debug!` line and nothing else, so an empty
/// `impl PortOperations for T {}` is a valid logging-only implementation.
///
/// # Example
///
/// ```rust,ignore
/// struct Quotas { produced_bbl: u64 }
///
/// impl PortOperations for Quotas {
///     fn adjust_production_rates(&mut self, ctx: &DayContext<'_>) {
///         if let Some(bpd) = ctx.decisions["production_bpd"].as_u64() {
///             self.produced_bbl += bpd;
///         }
///     }
/// }
/// ```
pub trait PortOperations: Send {
    /// Apply the month's production decisions for one day.
    fn adjust_production_rates(&mut self, ctx: &DayContext<'_>) {
        debug!(month = %ctx.month, day = ctx.day, "adjusting production rates");
    }

    /// Load, unload, and berth ships for one day.
    fn process_port_operations(&mut self, ctx: &DayContext<'_>) {
        debug!(
            month = %ctx.month,
            day = ctx.day,
            underway = ctx.underway().count(),
            "processing port operations"
        );
    }
}

impl<T: PortOperations + ?Sized> PortOperations for Box<T> {
    fn adjust_production_rates(&mut self, ctx: &DayContext<'_>) {
        (**self).adjust_production_rates(ctx);
    }

    fn process_port_operations(&mut self, ctx: &DayContext<'_>) {
        (**self).process_port_operations(ctx);
    }
}
