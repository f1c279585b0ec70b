//! Flushes a framebuffer to stdout as styled lines.
//!
//! Unlike a full-screen renderer this stays in the normal screen buffer: the
//! sheet is printed once and scrolls with the rest of the terminal output.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Encode every row of `fb` into `out`, one line per row.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_lines_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Print `fb` to stdout.
///
/// With `color` off only the characters are written, trailing spaces trimmed.
pub fn print_frame(fb: &FrameBuffer, color: bool) -> Result<()> {
    let mut buf = Vec::with_capacity(fb.width() as usize * fb.height() as usize * 4);
    if color {
        encode_lines_into(fb, &mut buf)?;
    } else {
        for y in 0..fb.height() {
            buf.extend_from_slice(fb.row_text(y).as_bytes());
            buf.push(b'\n');
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn encodes_one_line_per_row() {
        let mut fb = FrameBuffer::new(2, 3);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 2, Cell { ch: 'B', style });

        let mut out = Vec::new();
        encode_lines_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches('\n').count(), 3);
        assert!(text.contains('A'));
        assert!(text.contains('B'));
    }

    #[test]
    fn style_conversion_keeps_channels() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }
}
