use std::cell::RefCell;
use std::io::{self, Write};
use std::ops::Range;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use zfind::models::slice_to_cow;
use zfind::services::settings::{self, FindSettings};
use zfind::{
    Document, FindCommand, FindSession, FlatTextSurface, SearchController, SessionFlow,
    StatusUpdate, StructuredDocumentSurface, TextSurface,
};

mod logging;
mod terminal_guard;

use terminal_guard::TerminalGuard;

const PROMPT: &str = "Find: ";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 宿主渲染需要的表面信息
trait Preview: TextSurface {
    fn visible_lines(&self) -> Range<usize>;
    fn highlight(&mut self) -> Option<Range<usize>>;
    /// 与视口行号一致的分行，每行保留行尾换行符
    fn display_lines(&self) -> Vec<String>;
}

impl Preview for FlatTextSurface {
    fn visible_lines(&self) -> Range<usize> {
        self.viewport().visible_lines()
    }

    fn display_lines(&self) -> Vec<String> {
        self.buffer()
            .rope()
            .lines()
            .map(|line| slice_to_cow(line).into_owned())
            .collect()
    }

    fn highlight(&mut self) -> Option<Range<usize>> {
        self.selection_range()
    }
}

impl Preview for StructuredDocumentSurface {
    fn visible_lines(&self) -> Range<usize> {
        self.viewport().visible_lines()
    }

    fn display_lines(&self) -> Vec<String> {
        self.linear_text()
            .split_inclusive('\n')
            .map(str::to_string)
            .collect()
    }

    fn highlight(&mut self) -> Option<Range<usize>> {
        self.selection_range()
    }
}

struct Args {
    path: PathBuf,
    structured: bool,
}

fn parse_args() -> Option<Args> {
    let mut path = None;
    let mut structured = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--doc" => structured = true,
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args {
        path: path?,
        structured,
    })
}

fn main() -> io::Result<()> {
    let Some(args) = parse_args() else {
        eprintln!("usage: zfind <file> [--doc]");
        std::process::exit(2);
    };

    let _logging = logging::init();
    if let Err(e) = settings::ensure_settings_file() {
        tracing::warn!(error = %e, "failed to create default settings file");
    }
    let settings = settings::load_settings().unwrap_or_default();
    let text = std::fs::read_to_string(&args.path)?;
    tracing::info!(
        path = %args.path.display(),
        structured = args.structured,
        "opening file"
    );

    if args.structured {
        let surface = StructuredDocumentSurface::new(Document::from_plain_text(&text))
            .with_viewport_height(settings.viewport_lines);
        run(surface, &settings)
    } else {
        let surface = FlatTextSurface::new(&text).with_viewport_height(settings.viewport_lines);
        run(surface, &settings)
    }
}

fn run<S: Preview>(surface: S, settings: &FindSettings) -> io::Result<()> {
    let slot: Rc<RefCell<Option<(StatusUpdate, Instant)>>> = Rc::default();
    let sink_slot = Rc::clone(&slot);
    let mut controller = SearchController::with_settings(settings, move |update: &StatusUpdate| {
        *sink_slot.borrow_mut() = Some((update.clone(), Instant::now()));
    });
    controller.attach(surface);
    let mut session = FindSession::new(controller);

    let clear_delay = settings.status_clear_delay();
    let mut guard = TerminalGuard::new()?;
    let mut stdout = io::stdout();

    loop {
        let expired = slot
            .borrow()
            .as_ref()
            .is_some_and(|(update, at)| update.auto_clear && at.elapsed() >= clear_delay);
        if expired {
            slot.borrow_mut().take();
        }

        let status = slot
            .borrow()
            .as_ref()
            .map(|(update, _)| update.text.clone())
            .unwrap_or_default();
        draw(&mut stdout, &mut session, &status)?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            let Some(command) = FindCommand::from_key_event(&key) else {
                continue;
            };
            if session.handle(&command) == SessionFlow::Closed {
                break;
            }
        }
    }

    tracing::info!("find session closed");
    guard.restore()
}

fn draw<S: Preview>(
    out: &mut impl Write,
    session: &mut FindSession<S>,
    status: &str,
) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let width = width as usize;
    let body_rows = (height as usize).saturating_sub(2);

    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    if let Some(surface) = session.controller_mut().surface_mut() {
        let highlight = surface.highlight();
        let visible = surface.visible_lines();

        let mut line_start = 0usize;
        let mut row = 0u16;
        for (line_idx, line) in surface.display_lines().iter().enumerate() {
            if visible.contains(&line_idx) && (row as usize) < body_rows {
                queue!(out, cursor::MoveTo(0, row))?;
                draw_line(out, line, line_start, highlight.as_ref(), width)?;
                row += 1;
            }
            line_start += line.chars().count();
        }
    }

    let input = session.input();
    let case_flag = if input.case_sensitive() { "[Aa]" } else { "[aa]" };
    let status_row = height.saturating_sub(2);
    let input_row = height.saturating_sub(1);
    queue!(
        out,
        cursor::MoveTo(0, status_row),
        SetAttribute(Attribute::Reverse),
        Print(format!("{:<width$}", format!(" {} {}", case_flag, status), width = width)),
        SetAttribute(Attribute::Reset),
        cursor::MoveTo(0, input_row),
        Print(PROMPT),
        Print(input.text()),
    )?;

    let caret_col = PROMPT.len() + input.text()[..input.cursor_pos()].chars().count();
    queue!(out, cursor::MoveTo(caret_col as u16, input_row))?;
    out.flush()
}

fn draw_line(
    out: &mut impl Write,
    line: &str,
    line_start: usize,
    highlight: Option<&Range<usize>>,
    width: usize,
) -> io::Result<()> {
    let mut highlighted = false;
    for (i, ch) in line.chars().take(width).enumerate() {
        let inside = highlight.is_some_and(|r| r.contains(&(line_start + i)));
        if inside != highlighted {
            let attr = if inside {
                Attribute::Reverse
            } else {
                Attribute::Reset
            };
            queue!(out, SetAttribute(attr))?;
            highlighted = inside;
        }
        if is_line_end(ch) {
            break;
        }
        let ch = if ch.is_control() { ' ' } else { ch };
        queue!(out, Print(ch))?;
    }
    if highlighted {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// ropey 认定的换行字符
fn is_line_end(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
#[path = "../tests/unit/host.rs"]
mod tests;
