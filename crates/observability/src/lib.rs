//! Shared observability setup for the back-office services.

/// Install the process-wide tracing subscriber.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
