//! Presentation boundary: where filtered rows go after every refresh.
//!
//! The session only knows the [`Presenter`] trait. The terminal table and the
//! JSON stream are the two renderers shipped here; [`CapturePresenter`] keeps
//! the last view in memory for tests and one-shot scans.

use std::io::Write;

use crate::event::EventRow;
use crate::filter::ViewToggles;

/// Receives the full filtered view after every mutation.
pub trait Presenter {
    /// Current state of the display toggles (prune, only-matched).
    fn toggles(&self) -> ViewToggles;

    fn present(&mut self, rows: &[EventRow]);
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn toggles(&self) -> ViewToggles {
        (**self).toggles()
    }

    fn present(&mut self, rows: &[EventRow]) {
        (**self).present(rows)
    }
}

/// Keeps the most recent rows and counts refreshes.
#[derive(Debug, Default)]
pub struct CapturePresenter {
    pub view: ViewToggles,
    pub rows: Vec<EventRow>,
    pub refreshes: usize,
}

impl CapturePresenter {
    pub fn new(view: ViewToggles) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }
}

impl Presenter for CapturePresenter {
    fn toggles(&self) -> ViewToggles {
        self.view
    }

    fn present(&mut self, rows: &[EventRow]) {
        self.rows = rows.to_vec();
        self.refreshes += 1;
    }
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Plain-text table: one line per row, details indented below when expanded.
pub struct TextPresenter<W: Write> {
    out: W,
    view: ViewToggles,
    expand_details: bool,
    clear_screen: bool,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, view: ViewToggles) -> Self {
        Self {
            out,
            view,
            expand_details: false,
            clear_screen: false,
        }
    }

    /// Always list details, not only for matched rows.
    pub fn expand_details(mut self, yes: bool) -> Self {
        self.expand_details = yes;
        self
    }

    /// Clear the terminal before each redraw (live mode).
    pub fn clear_screen(mut self, yes: bool) -> Self {
        self.clear_screen = yes;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn is_expanded(&self, row: &EventRow) -> bool {
        self.expand_details || (row.only_matched && !row.filter_text.is_empty())
    }

    fn write_rows(&mut self, rows: &[EventRow]) -> std::io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        if rows.is_empty() {
            writeln!(self.out, "No tracker events.")?;
            return self.out.flush();
        }
        writeln!(self.out, "{:<6} {}", "TYPE", "SUMMARY")?;
        for row in rows {
            writeln!(self.out, "{:<6} {}", row.tracker.tag(), row.summary)?;
            if self.is_expanded(row) {
                for param in &row.details {
                    writeln!(self.out, "       {}", param.joined())?;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn toggles(&self) -> ViewToggles {
        self.view
    }

    fn present(&mut self, rows: &[EventRow]) {
        if let Err(e) = self.write_rows(rows) {
            tracing::warn!("failed to render rows: {}", e);
        }
    }
}

/// One JSON array per refresh, newline-terminated.
pub struct JsonPresenter<W: Write> {
    out: W,
    view: ViewToggles,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W, view: ViewToggles) -> Self {
        Self { out, view }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn toggles(&self) -> ViewToggles {
        self.view
    }

    fn present(&mut self, rows: &[EventRow]) {
        let result = serde_json::to_writer(&mut self.out, rows)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("failed to write JSON rows: {}", e);
        }
    }
}
