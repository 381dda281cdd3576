use std::io::Write;

use base64::Engine;

/// OSC 52 escape sequence that asks the terminal to put `text` on the clipboard.
pub(super) fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

/// Copy text to the system clipboard via OSC 52 escape sequence.
/// Works in Ghostty, iTerm2, kitty, WezTerm, and most modern terminals.
pub(super) fn osc52_copy(text: &str) {
    // Write directly to stdout, bypassing the terminal backend buffer
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(osc52_sequence(text).as_bytes());
    let _ = stdout.flush();
}
