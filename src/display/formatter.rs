//! Markdown terminal formatting using termimad

use std::io::{self, Write};

use termimad::{gray, MadSkin};
use tracing::warn;

use crate::display::terminal::should_use_colors;

/// Whether output should be styled with termimad
///
/// `allow_color` is the user's preference; styling is still skipped when
/// the environment or a non-TTY stdout rules it out.
pub fn styled_output(allow_color: bool) -> bool {
    allow_color && should_use_colors()
}

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str, styled: bool) {
    if styled {
        if let Err(e) = print_rich(markdown) {
            warn!(error = %e, "terminal rendering failed, using plain output");
            print_plain(markdown);
        }
    } else {
        print_plain(markdown);
    }
}

/// Print with termimad styling
fn print_rich(markdown: &str) -> Result<(), termimad::Error> {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.write_text(markdown)
}

/// Customize termimad skin for ledger output
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Headers: Magenta title, yellow reading dates
    skin.headers[0].set_fg(Magenta);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Yellow);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.paragraph.set_fg(gray(20));
    skin.bullet.set_fg(Magenta);
}

/// Print plain markdown without formatting
fn print_plain(markdown: &str) {
    let stdout = io::stdout();
    if let Err(e) = write_plain(&mut stdout.lock(), markdown) {
        warn!(error = %e, "failed to write output");
    }
}

fn write_plain<W: Write>(out: &mut W, markdown: &str) -> io::Result<()> {
    writeln!(out, "{}", markdown)
}
