//! Logging integration for django-salesforce.
//!
//! Model declaration emits [`tracing`] events: column mappings at `debug`,
//! unsupported relation policies at `warn`. This module installs a subscriber
//! configured from [`Settings`](crate::settings::Settings) and provides the
//! span that groups the events of one model.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise structured JSON. Installing a
/// second subscriber is silently ignored.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span covering the declaration of one Salesforce object.
///
/// # Examples
///
/// ```
/// use django_salesforce_core::logging::model_span;
///
/// let span = model_span("Contact");
/// let _guard = span.enter();
/// tracing::debug!("registering fields");
/// ```
pub fn model_span(object_name: &str) -> tracing::Span {
    tracing::debug_span!("salesforce_model", object = object_name)
}
