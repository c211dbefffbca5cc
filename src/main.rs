use anyhow::{Context, Result};
use clap::Parser;
use coursepick::cli::Cli;
use coursepick::core::export::read_export;
use coursepick::store::config_path;
use coursepick::store::settings::{Settings, load_settings, save_settings};
use coursepick::{Action, App, Catalog, Selection, logging};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Settings and logging (before TUI)
    let config_dir = config_path::ensure_config_dir();
    let mut settings = load_settings(&config_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  {e:#}; using defaults");
        Settings::default()
    });

    if let Err(e) = logging::init(
        &config_path::log_file_path(&config_dir),
        cli.debug,
        settings.log_level.as_deref(),
    ) {
        eprintln!("⚠️  Logging disabled: {e:#}");
    }

    // 2. Load the catalog once for the whole session
    let catalog_path = cli.catalog_path(&settings).with_context(|| {
        format!(
            "No catalog given.\n\nUSAGE: coursepick <CATALOG.csv>\n\nOr set \"catalog_path\" in {}",
            config_dir.join("config.json").display()
        )
    })?;
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    if settings.catalog_path.is_none() {
        settings.catalog_path = Some(std::fs::canonicalize(&catalog_path).unwrap_or(catalog_path));
        if let Err(e) = save_settings(&config_dir, &settings) {
            tracing::warn!(error = %e, "Could not remember catalog path");
        }
    }

    let mut selection = Selection::new();
    if let Some(path) = &cli.import {
        let table = read_export(path)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        let report = selection.import(&table);
        tracing::info!(
            path = %path.display(),
            added = report.added,
            duplicates = report.duplicates,
            "Selection imported at startup"
        );
    }

    let export_path = cli.export_path(&settings);

    // 3. Install panic hook so terminal is restored on panic
    install_panic_hook();

    // 4. Initialize TUI and run the event loop
    let mut terminal = ratatui::init();
    let mut app = App::new(
        catalog,
        selection,
        settings.title().to_string(),
        export_path,
    );
    let result = run(&mut terminal, &mut app);

    // 5. Restore terminal
    ratatui::restore();
    tracing::info!(selected = app.selection.len(), "Session ended");

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Skip release/repeat events on some terminals
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == Action::Quit {
                return Ok(());
            }
        }
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
