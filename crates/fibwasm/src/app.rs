//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use fibwasm_core::{FibonacciEngine, LoggingObserver, ProgressSubject};

use crate::completion::generate_completion;
use crate::config::{AppConfig, OutputFormat};
use crate::output::write_to_file;
use crate::presenter::ResultPresenter;
use crate::progress::BarObserver;
use crate::ui;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if let Some(name) = &config.greet {
        println!("{}", fibwasm_core::greet(name));
        return Ok(());
    }

    run_fibonacci(config)
}

fn run_fibonacci(config: &AppConfig) -> Result<()> {
    let engine = FibonacciEngine::new(config.options());

    let logger = LoggingObserver::with_label(format!("F({})", config.n));
    let bar = config.show_progress().then(|| BarObserver::new(config.n));
    let mut subject = ProgressSubject::new();
    subject.register(&logger);
    if let Some(bar) = &bar {
        subject.register(bar);
    }

    let start = Instant::now();
    let outcome = engine.compute_value(config.n, &subject);
    let duration = start.elapsed();
    if let Some(bar) = &bar {
        bar.clear();
    }
    let value = outcome.with_context(|| format!("computing F({})", config.n))?;
    info!(n = config.n, elapsed = ?duration, "Computation finished");

    // The engine only accepts non-negative indices.
    let n = config.n.unsigned_abs();
    ResultPresenter::new(config.format, config.verbose, config.quiet, config.details)
        .present(n, &value, duration)?;

    if let Some(path) = &config.output {
        write_to_file(path, &value).with_context(|| format!("writing result to {path}"))?;
        if !config.quiet && config.format == OutputFormat::Text {
            ui::print_success(&format!("Result written to {path}"));
        }
    }

    Ok(())
}
