use clap::Parser;
use lessonplay::{Cli, run};

fn main() {
    // Dying quietly on a closed pipe (`lessonplay summarize | head`) beats
    // panicking inside println.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
