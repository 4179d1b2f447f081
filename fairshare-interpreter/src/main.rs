#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use bootstrap::{AppConfig, init_logging};
use fairshare_application::LedgerProcessor;
use fairshare_infrastructure::{GroupDocument, JsonSnapshotSource};
use fairshare_presentation::LedgerPresenter;
use std::{borrow::Cow, env, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: fairshare-interpreter <group.json>".into());
    };

    let config = AppConfig::from_env();
    let GroupDocument {
        snapshot,
        display_names,
    } = JsonSnapshotSource::new(&path)
        .load_document()
        .map_err(|err| format!("Failed to load '{path}': {err}"))?;

    let issues = LedgerProcessor::validation_issues(&snapshot);
    for issue in &issues {
        tracing::warn!(%issue, "Record failed validation");
    }
    if let Some(report) = LedgerPresenter::render_issues(&issues) {
        eprintln!("{report}\n");
    }

    let result = LedgerProcessor::evaluate(&snapshot);
    let view = LedgerPresenter::render_with_members(&result, &config.currency, &display_names);
    println!("{}", view.to_text());

    if let Some(history) =
        LedgerPresenter::render_history(&snapshot.expenses, &config.currency, &display_names)
    {
        println!("\n{history}");
    }

    if let Some(viewer) = &config.viewer {
        if !snapshot.roster.contains(viewer) {
            tracing::warn!(viewer = %viewer, "Viewer is not on the roster");
        }
        let viewer_view = LedgerPresenter::render_viewer(
            &result,
            &snapshot,
            viewer,
            &config.currency,
            &display_names,
        );
        println!("\n{}", viewer_view.to_text());
    }

    Ok(())
}
