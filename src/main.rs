// SPDX-License-Identifier: MPL-2.0
//! Terminal demo: queues each argument as an alert and plays the view
//! lifecycle against a simulated clock.
//!
//! ```text
//! alert-queue-demo [--auto-hide-ms N] [--exit-ms N] [--config PATH] [--diagnostics] BODY...
//! ```
//!
//! A body may be prefixed with a severity, e.g. `error:Disk full`.

use alert_queue::alert::{AlertMessage, AlertProvider, Event, Presenter, PresenterSettings, Variant};
use alert_queue::config::{self, Config};
use alert_queue::diagnostics::DiagnosticsCollector;
use alert_queue::domain::ui::AutoHideDuration;
use alert_queue::error::{Error, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TICK: Duration = Duration::from_millis(100);
const DEFAULT_EXIT_MS: u64 = 225;

struct Args {
    auto_hide_ms: Option<u64>,
    exit_ms: u64,
    config_path: Option<PathBuf>,
    diagnostics: bool,
    bodies: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = pico_args::Arguments::from_env();
    let arg_err = |err: pico_args::Error| Error::Config(err.to_string());

    let auto_hide_ms = args.opt_value_from_str("--auto-hide-ms").map_err(arg_err)?;
    let exit_ms = args
        .opt_value_from_str("--exit-ms")
        .map_err(arg_err)?
        .unwrap_or(DEFAULT_EXIT_MS);
    let config_path = args.opt_value_from_str("--config").map_err(arg_err)?;
    let diagnostics = args.contains("--diagnostics");
    let bodies = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    Ok(Args {
        auto_hide_ms,
        exit_ms,
        config_path,
        diagnostics,
        bodies,
    })
}

fn parse_message(raw: &str) -> AlertMessage {
    match raw.split_once(':') {
        Some(("success", body)) => AlertMessage::success(body),
        Some(("info", body)) => AlertMessage::info(body),
        Some(("warning", body)) => AlertMessage::warning(body),
        Some(("error", body)) => AlertMessage::error(body),
        _ => AlertMessage::new(raw),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args()?;
    let config: Config = match &args.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    let mut settings = PresenterSettings::from(&config);
    if let Some(ms) = args.auto_hide_ms {
        settings.auto_hide = AutoHideDuration::from_millis(ms);
    }

    let mut collector = DiagnosticsCollector::new(config.diagnostics_capacity());
    let provider = AlertProvider::with_diagnostics(collector.handle());
    let scope = provider.scope();
    let state = scope.state();
    let mut presenter = Presenter::new(settings);

    for body in &args.bodies {
        scope.add(parse_message(body))?;
    }

    let start = Instant::now();
    let mut now = start;
    let mut exit_due: Option<Instant> = None;
    let mut last_shown = None;

    while state.current().is_some() {
        collector.process_pending();
        if let Some(view) = presenter.view(&state) {
            if view.is_open && last_shown != Some(view.key) {
                last_shown = Some(view.key);
                let text = match &view.variant {
                    Variant::Plain { body, .. } => body.clone(),
                    Variant::Alert {
                        severity,
                        title: Some(title),
                        body,
                    } => format!("[{severity}] {title}: {body}"),
                    Variant::Alert { severity, body, .. } => format!("[{severity}] {body}"),
                };
                tracing::info!(
                    key = %view.key,
                    at_ms = now.duration_since(start).as_millis() as u64,
                    pending = state.pending_count(),
                    "showing {text}"
                );
            }
        }

        if state.is_open() {
            presenter.handle(&state, Event::Tick, now);
        } else {
            let due = *exit_due.get_or_insert(now + Duration::from_millis(args.exit_ms));
            if now >= due {
                exit_due = None;
                presenter.handle(&state, Event::Exited, now);
                continue;
            }
        }
        now += TICK;
    }

    tracing::info!(
        elapsed_ms = now.duration_since(start).as_millis() as u64,
        "all alerts shown"
    );

    collector.process_pending();
    if args.diagnostics {
        match collector.export_json() {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!(%err, "failed to export diagnostics"),
        }
    }
    Ok(())
}
