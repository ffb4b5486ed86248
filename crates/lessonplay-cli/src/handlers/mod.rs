pub mod analyze_potential;
pub mod analyze_tmssr;
pub mod init;
pub mod progress;
pub mod summarize;
