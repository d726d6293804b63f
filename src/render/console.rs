use std::io::Write;

use crate::{encode::encoder::Symbol, foundation::core::BORDER};

const DARK: &str = "##";
const LIGHT: &str = "  ";

/// Print `symbol` with a quiet zone as two glyphs per module, then a blank line.
pub fn render_console<W: Write + ?Sized>(out: &mut W, symbol: &Symbol) -> std::io::Result<()> {
    let side = symbol.side() as i32;
    let mut row = String::with_capacity(((side + 2 * BORDER) as usize) * 2 + 1);
    for y in -BORDER..side + BORDER {
        row.clear();
        for x in -BORDER..side + BORDER {
            row.push_str(if symbol.is_dark(x, y) { DARK } else { LIGHT });
        }
        row.push('\n');
        out.write_all(row.as_bytes())?;
    }
    out.write_all(b"\n")
}

#[cfg(test)]
#[path = "../../tests/unit/render/console.rs"]
mod tests;
