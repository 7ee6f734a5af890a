use log::error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const RULES_HEADING: &str = "### Rules";

/// Everything from the rules heading to the end of the document.
pub fn extract_rules(text: &str) -> Option<&str> {
    text.find(RULES_HEADING).map(|start| &text[start..])
}

/**
 * Prints the rules section of a markdown file.
 *
 * A missing file or heading is reported to the user but never stops the
 * simulator; only a failure to write to `out` is returned.
 */
pub fn print_rules<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    match fs::read_to_string(path) {
        Ok(data) => match extract_rules(&data) {
            Some(rules) => writeln!(out, "{}", rules),
            None => writeln!(out, "The Rules heading was not found in the README file."),
        },
        Err(e) => {
            error!("Failed to read rules from {}: {}", path.display(), e);
            eprintln!("Error reading the README file: {}", e);
            Ok(())
        }
    }
}
