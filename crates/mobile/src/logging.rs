use std::sync::Once;

use tracing_subscriber::{filter::FilterFn, layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) fn setup_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = FilterFn::new(|meta| {
            meta.module_path()
                .unwrap_or_default()
                .starts_with("titan_rush")
        });

        // try_init: the host may already have installed a subscriber
        let _ = tracing_subscriber::registry()
            .with(platform_layer())
            .with(filter)
            .try_init();
    })
}

#[cfg(target_os = "android")]
fn platform_layer<S>() -> Option<impl tracing_subscriber::Layer<S>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    use tracing_logcat::{LogcatMakeWriter, LogcatTag};
    use tracing_subscriber::fmt::format::Format;

    let tag = LogcatTag::Fixed("TitanRush-Rust".to_owned());
    let writer = LogcatMakeWriter::new(tag).ok()?;
    Some(
        tracing_subscriber::fmt::layer()
            .event_format(Format::default().with_level(false).without_time())
            .with_writer(writer)
            .with_ansi(false),
    )
}

#[cfg(not(target_os = "android"))]
fn platform_layer<S>() -> Option<impl tracing_subscriber::Layer<S>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}
