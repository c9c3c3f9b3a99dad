use crate::model::Model;
use std::io::{self, Write};

/// Writes every section and its numbered items, e.g. for printing the list once the TUI closes.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_sections(model: &Model, out: &mut impl Write) -> io::Result<()> {
    for section in model.sections() {
        writeln!(out, "{}:", section.title)?;
        for (index, item) in section.items.iter().enumerate() {
            writeln!(out, "[{}] {item}", index + 1)?;
        }
    }
    Ok(())
}
