//! Test harness for the DSTV/NC import pipeline.
//!
//! - [`fixtures`] — DSTV text fixtures (ST headers, holes, multi-profile files)
//! - [`assertions`] — rich assertion helpers with diagnostics
//! - [`scenarios`] — the spec's worked examples (S1-S6), runnable from any test crate

pub mod assertions;
pub mod fixtures;
pub mod scenarios;

use std::sync::Once;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("no scene element with id '{id}' ({ctx})")]
    ElementNotFound { id: String, ctx: String },

    #[error(transparent)]
    Import(#[from] nc_import::ImportError),
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing-subscriber` `fmt` layer once per process, so a test
/// run with `cargo test -- --nocapture` shows the pipeline's own spans
/// instead of needing a separate logging harness. Safe to call from every
/// test; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}
