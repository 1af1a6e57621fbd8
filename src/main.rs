//! Terminal bitmap font editor (default binary).
//!
//! Paints pixels for printable-ASCII glyphs, previews the character set, and
//! reads/writes the flat `.rmsfont` format plus a C header export.
//! Uses crossterm for input and a custom framebuffer-based renderer.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_bitfont::core::{codec, export, EditorState, IoRequest};
use tui_bitfont::input::{action_for_key, should_quit};
use tui_bitfont::term::{EditorView, FrameBuffer, TerminalRenderer, Viewport};
use tui_bitfont::types::FontSize;

/// Draw/input poll interval. Nothing animates; this only bounds how quickly
/// a terminal resize is picked up.
const POLL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    size: FontSize,
    path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut size = FontSize::default();
    let mut path = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let value = args
                    .get(i)
                    .context("--size requires a value, e.g. --size 8x16")?;
                size = FontSize::from_str(value)
                    .with_context(|| format!("unsupported size '{}'", value))?;
            }
            other if other.starts_with("--") => {
                bail!("unknown flag '{}'", other);
            }
            other => {
                if path.is_some() {
                    bail!("only one font file may be given");
                }
                path = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    Ok(Args { size, path })
}

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;

    let mut editor = EditorState::new(args.size);
    if let Some(path) = &args.path {
        if path.exists() {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            if editor.load_bytes(&bytes).is_err() {
                bail!(
                    "{}: file size {} bytes does not match any supported font size",
                    path.display(),
                    bytes.len()
                );
            }
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut editor, args.path);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    editor: &mut EditorState,
    path: Option<PathBuf>,
) -> Result<()> {
    let view = EditorView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(editor, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = action_for_key(key) {
                    if let Some(request) = editor.apply_action(action) {
                        perform_io(editor, request, path.as_deref());
                    }
                }
            }
            Event::Resize(..) => {
                term.invalidate();
            }
            _ => {}
        }
    }
}

/// Execute a file request and report the outcome on the status line.
///
/// I/O failures never unwind into the editor; the font in memory stays as it
/// was and the error is shown to the user.
fn perform_io(editor: &mut EditorState, request: IoRequest, path: Option<&std::path::Path>) {
    match request {
        IoRequest::Save => {
            let bytes = codec::encode_font(editor.font());
            let target = path
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(export::font_file_name(editor.font())));
            match fs::write(&target, &bytes) {
                Ok(()) => editor.set_status(
                    format!("Saved {} bytes to {}.", bytes.len(), target.display()),
                    false,
                ),
                Err(err) => editor.set_status(
                    format!("Save failed: {}: {}", target.display(), err),
                    true,
                ),
            }
        }
        IoRequest::ExportHeader => {
            let source = export::header_source(editor.font());
            let target = PathBuf::from(export::header_file_name(editor.font()));
            match fs::write(&target, source) {
                Ok(()) => editor.set_status(
                    format!("Exported C array to {}.", target.display()),
                    false,
                ),
                Err(err) => editor.set_status(
                    format!("Export failed: {}: {}", target.display(), err),
                    true,
                ),
            }
        }
        IoRequest::Reload => {
            let Some(path) = path else {
                editor.set_status("No font file to reload.".to_string(), true);
                return;
            };
            match fs::read(path) {
                // load_bytes reports success or mismatch on the status line
                // itself and leaves the font untouched on failure.
                Ok(bytes) => {
                    let _ = editor.load_bytes(&bytes);
                }
                Err(err) => editor.set_status(
                    format!("Reload failed: {}: {}", path.display(), err),
                    true,
                ),
            }
        }
    }
}
