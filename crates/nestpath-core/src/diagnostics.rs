// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pluggable sinks for errors that are handled rather than returned.
//!
//! Soft-failing helpers such as `merge_object` recover from bad input by
//! returning an empty object. The error they recovered from is handed to a
//! [`DiagnosticSink`] so callers can observe it, log it, or ignore it.

use crate::error::NestError;
use parking_lot::Mutex;

/// A handled error together with the operation that recovered from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the recovering operation, e.g. `merge_object`
    pub operation: &'static str,
    /// The error that was converted into a soft result
    pub error: NestError,
}

impl Diagnostic {
    /// Create a diagnostic for `operation`
    #[must_use]
    pub const fn new(operation: &'static str, error: NestError) -> Self {
        Self { operation, error }
    }
}

/// Receiver for handled errors
pub trait DiagnosticSink: Send + Sync {
    /// Record one handled error
    fn report(&self, diagnostic: &Diagnostic);
}

/// Emits diagnostics as `tracing` error events. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::error!(
            operation = diagnostic.operation,
            error = %diagnostic.error,
            "handled error in {}",
            diagnostic.operation
        );
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps every diagnostic in memory for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the diagnostics recorded so far
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Number of diagnostics recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
