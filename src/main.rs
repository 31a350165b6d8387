//! editbuf - replay scripted editing sessions against a text buffer
//!
//! Usage:
//!   editbuf samples/scenarios/word_select.yaml
//!   editbuf samples/scenarios/multiline.yaml --verbose
//!   editbuf session.yaml --text "hello world" --json

use anyhow::{Context, Result};
use clap::Parser;

use editbuf::cli::CliArgs;
use editbuf::config::{EditorConfig, StorageKind};
use editbuf::editable::{StringStorage, TextBuffer, TextEditMsg, TextStorageMut};
use editbuf::layout::{BufferView, LayoutRenderer, MarkerRenderer};
use editbuf::scenario::Scenario;

fn main() -> Result<()> {
    editbuf::tracing::init();

    let args = CliArgs::parse();
    let config = args.load_config()?;
    let mut scenario = Scenario::load(&args.scenario)?;
    if let Some(text) = args.text.clone() {
        scenario.text = text;
    }

    tracing::info!(
        scenario = %args.scenario.display(),
        storage = ?config.storage,
        steps = scenario.steps.len(),
        edits = scenario.edit_count(),
        "starting replay"
    );

    match config.storage {
        StorageKind::Rope => {
            let buffer = TextBuffer::with_config(&scenario.text, &config);
            run(buffer, &scenario, &args)
        }
        StorageKind::String => {
            let buffer = config_string_buffer(&scenario.text, &config);
            run(buffer, &scenario, &args)
        }
    }
}

fn config_string_buffer(text: &str, config: &EditorConfig) -> TextBuffer<StringStorage> {
    config.configure(TextBuffer::with_storage(StringStorage::from_text(text)))
}

fn run<S: TextStorageMut>(
    mut buffer: TextBuffer<S>,
    scenario: &Scenario,
    args: &CliArgs,
) -> Result<()> {
    let mut printed: Result<()> = Ok(());
    scenario.replay(&mut buffer, |index, step, view| {
        if args.verbose && printed.is_ok() {
            printed = print_view(Some((index, step)), view, args.json);
        }
    });
    printed?;

    if !args.verbose {
        print_view(None, &buffer.view(), args.json)?;
    }
    Ok(())
}

fn print_view(step: Option<(usize, &TextEditMsg)>, view: &BufferView, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(view).context("Failed to serialize view")?;
        println!("{}", line);
        return Ok(());
    }

    if let Some((index, msg)) = step {
        println!("#{} {:?}", index + 1, msg);
    }
    let rows = view.selection_rows();
    println!("{}", MarkerRenderer.render(view));
    println!(
        "cursor={} selection={}..{} rows={}",
        view.cursor,
        view.selection.start,
        view.selection.end,
        rows.len()
    );
    Ok(())
}
