//! Watch mode: regenerate whenever the component or example trees change.
//!
//! Change notifications are produced on the watcher's own thread and bridged
//! into the async loop through a bounded channel (`blocking_send` on the
//! notify side, `recv().await` here).
//!
//! Runs are single-flight: before each run every queued notification is
//! drained, so a burst of events triggers one run, and anything arriving
//! while a run is in progress coalesces into exactly one follow-up run.
//! The watcher itself holds no state across runs.

use anyhow::{Context, Result};
use colored::Colorize;
use compdoc_generate::Generator;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Capacity of the notification channel. The payload is a unit marker, so a
/// full channel only ever delays the watcher thread, never loses the fact
/// that something changed.
const CHANNEL_CAPACITY: usize = 64;

/// Watches both roots and re-runs the generator on change until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or a root cannot be
/// subscribed. Failures of individual runs are reported and watching
/// continues.
pub async fn watch_loop(generator: Generator) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<()>(CHANNEL_CAPACITY);

    let mut watcher = RecommendedWatcher::new(
        move |result: notify::Result<Event>| match result {
            Ok(event) if is_change(&event.kind) => {
                let _ = tx.blocking_send(());
            }
            Ok(_) => {}
            Err(err) => error!(error = %err, "file watcher error"),
        },
        notify::Config::default(),
    )
    .context("failed to create file watcher")?;

    let config = generator.config();
    watcher
        .watch(&config.components_root, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", config.components_root.display()))?;
    watcher
        .watch(&config.examples_root, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", config.examples_root.display()))?;

    println!(
        "{}",
        format!(
            "watching {} and {} (ctrl-c to stop)",
            config.components_root.display(),
            config.examples_root.display()
        )
        .cyan()
    );

    loop {
        tokio::select! {
            changed = rx.recv() => {
                if changed.is_none() {
                    break;
                }
                drain(&mut rx);
                run_once(&generator).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("watch loop interrupted");
                break;
            }
        }
    }
    Ok(())
}

/// Performs one generation run off the async loop and reports its outcome.
///
/// A failed run (scan or write error) does not end watch mode; the error is
/// shown and the loop keeps waiting for the next change.
async fn run_once(generator: &Generator) -> Result<()> {
    debug!("change detected, regenerating");
    let worker = generator.clone();
    let outcome = tokio::task::spawn_blocking(move || worker.run())
        .await
        .context("generation task panicked")?;
    match outcome {
        Ok(report) => crate::report_run(&report),
        Err(err) => println!("{}", format!("generation failed: {err}").red()),
    }
    Ok(())
}

/// Empties the channel so queued notifications collapse into the run that is
/// about to start.
fn drain(rx: &mut mpsc::Receiver<()>) {
    while rx.try_recv().is_ok() {}
}

/// Qualifying events: anything that creates, modifies, or removes a file.
/// Access-only notifications do not trigger a run.
fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}
