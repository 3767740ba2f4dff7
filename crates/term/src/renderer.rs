//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Half-block frames change colour on nearly every cell, so the encoder keeps
//! track of the colours the terminal currently has and only emits the parts
//! of a style that differ. Changed cells separated by a short unchanged
//! stretch are sent as one run; reprinting a few cells is cheaper than
//! another cursor move.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Longest unchanged stretch folded into a surrounding run.
const MERGE_GAP: usize = 4;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle("tui-flappy"))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Make the next draw a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, keeping it as the reference for the next diff.
    ///
    /// On return `fb` holds the previous frame's storage, ready to be
    /// overwritten, so steady-state drawing reuses two buffers.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut spare = match self.last.take() {
            Some(prev) if (prev.width(), prev.height()) == (fb.width(), fb.height()) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                debug!(width = fb.width(), height = fb.height(), "full redraw");
                encode_full_into(fb, &mut self.buf)?;
                let mut spare = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                spare.resize(fb.width(), fb.height());
                spare
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut spare, fb);
        self.last = Some(spare);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Terminal attribute state as last emitted.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if style.bold != self.bold {
            let attr = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(attr))?;
            self.bold = style.bold;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        self.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a clear-and-repaint of the whole frame into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for &cell in fb.row(y) {
            pen.print(out, cell)?;
        }
    }
    finish(out)
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes are repainted row by row.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;

    let mut pen = Pen::default();
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let start = x as usize;
        for &cell in &next.row(y)[start..start + len as usize] {
            pen.print(out, cell)?;
        }
        Ok(())
    })?;
    finish(out)
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each run of cells to repaint, row by row.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if (prev.width(), prev.height()) != (next.width(), next.height()) {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        let w = new.len();
        let mut x = 0;
        while x < w {
            if old[x] == new[x] {
                x += 1;
                continue;
            }

            let start = x;
            let mut end = x + 1;
            let mut probe = end;
            while probe < w && probe - end < MERGE_GAP {
                if old[probe] != new[probe] {
                    end = probe + 1;
                }
                probe += 1;
            }
            f(start as u16, y, (end - start) as u16)?;
            x = probe;
        }
    }

    Ok(())
}
