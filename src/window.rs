use {
    crate::{fmt, meter::Meter, snapshot::Snapshot},
    crossterm::{
        QueueableCommand, cursor,
        event::{self, Event, KeyCode, KeyEventKind},
        style::Print,
        terminal,
    },
    std::{
        io::{self, Stdout, Write},
        time::Duration,
    },
};

/// the dashboard geometry, in cells.
const BOX_X: u16 = 2;
const BOX_Y: u16 = 1;
const BOX_WIDTH: u16 = 70;
const BOX_HEIGHT: u16 = 14;

/// the width of a percentage bar.
const BAR_WIDTH: usize = 35;

/// a raw-mode terminal hosting the dashboard.
///
/// the terminal is restored on drop, on the error path included.
pub struct Window {
    out: Stdout,
}

/// === impl Window ===

impl Window {
    /// takes over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn open() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        out.queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .flush()?;

        Ok(Self { out })
    }

    /// returns true once the user has asked to quit.
    ///
    /// drains any pending input without blocking; only `q` quits.
    pub fn quit_requested(&self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// draws one frame from the given snapshot.
    ///
    /// an unavailable percentage omits its bar; the other lines render an
    /// explicit placeholder instead.
    pub fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let Self { out } = self;

        out.queue(terminal::Clear(terminal::ClearType::All))?;
        Self::bordered_box(out, BOX_X, BOX_Y, BOX_WIDTH, BOX_HEIGHT)?;

        let mut row = BOX_Y + 1;
        let mut line = |out: &mut Stdout, text: String| -> io::Result<()> {
            out.queue(cursor::MoveTo(BOX_X + 2, row))?.queue(Print(text))?;
            row += 1;
            Ok(())
        };

        line(out, "Mini System Monitor".to_owned())?;
        line(out, "─".repeat(48))?;
        line(out, format!("Host: {}", snapshot.hostname))?;
        line(out, format!("User: {}", snapshot.username))?;
        line(
            out,
            format!("Uptime: {}", fmt::format_uptime(snapshot.uptime)),
        )?;
        line(
            out,
            match snapshot.temperature {
                Some(celsius) => format!("Temperature: {celsius:.1}°C"),
                None => "Temperature: Not available".to_owned(),
            },
        )?;
        line(
            out,
            format!(
                "Network: ↓ {}/s  ↑ {}/s",
                fmt::format_bytes(snapshot.net.rx),
                fmt::format_bytes(snapshot.net.tx),
            ),
        )?;

        // a blank row between the text and the bars.
        row += 1;

        for (label, value) in [
            ("CPU  ", snapshot.cpu),
            ("RAM  ", snapshot.ram),
            ("Disk ", snapshot.disk),
        ] {
            let Some(percent) = value else { continue };
            let meter = Meter {
                label,
                percent,
                width: BAR_WIDTH,
            };
            out.queue(cursor::MoveTo(BOX_X + 2, row))?
                .queue(Print(meter.render()))?;
            row += 1;
        }

        out.flush()
    }

    fn bordered_box(out: &mut Stdout, x: u16, y: u16, width: u16, height: u16) -> io::Result<()> {
        let (right, bottom) = (x + width - 1, y + height - 1);

        out.queue(cursor::MoveTo(x, y))?.queue(Print('┌'))?;
        out.queue(cursor::MoveTo(right, y))?.queue(Print('┐'))?;
        out.queue(cursor::MoveTo(x, bottom))?.queue(Print('└'))?;
        out.queue(cursor::MoveTo(right, bottom))?.queue(Print('┘'))?;

        for col in (x + 1)..right {
            // edge cells are only queued here; draw flushes the frame once.
            out.queue(cursor::MoveTo(col, y))?.queue(Print('─'))?;
            out.queue(cursor::MoveTo(col, bottom))?.queue(Print('─'))?;
        }
        for line in (y + 1)..bottom {
            out.queue(cursor::MoveTo(x, line))?.queue(Print('│'))?;
            out.queue(cursor::MoveTo(right, line))?.queue(Print('│'))?;
        }

        Ok(())
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        let Self { out } = self;
        let _ = out
            .queue(cursor::Show)
            .and_then(|out| out.queue(terminal::LeaveAlternateScreen))
            .and_then(|out| out.flush());
        let _ = terminal::disable_raw_mode();
    }
}
