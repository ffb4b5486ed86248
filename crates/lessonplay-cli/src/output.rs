use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Color only when stdout is a terminal; piped output stays plain.
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

pub fn print_header(header: &str) {
    if color_enabled() {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
}
