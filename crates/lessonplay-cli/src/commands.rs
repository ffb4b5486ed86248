use super::args::{AnalyzeCommand, Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use lessonplay_engine::RecordFilter;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "lessonplay.toml";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LABELS_FILE: &str = "highlow.csv";
const DEFAULT_SUMMARY_FILE: &str = "summary.csv";

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from(Path::new(CONFIG_FILE))?;
    let data_dir = resolve_data_dir(&cli, &config);

    let Some(command) = cli.command else {
        show_guidance(&data_dir)?;
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&data_dir, Path::new(CONFIG_FILE)),

        Commands::Summarize {
            labels,
            output,
            lesson,
            scenario,
            user,
            include_empty,
        } => {
            let labels = resolve_labels(labels, &config, &data_dir);
            let filter = RecordFilter {
                lesson: lesson.map(Into::into),
                scenario: scenario.map(Into::into),
                user,
                include_empty,
            };
            handlers::summarize::handle(
                &data_dir,
                labels.as_deref(),
                output.as_deref(),
                &filter,
                cli.format,
            )
        }

        Commands::Analyze { command } => match command {
            AnalyzeCommand::Potential { file } => {
                handlers::analyze_potential::handle(&file, cli.format)
            }
            AnalyzeCommand::Tmssr {
                file,
                proportions,
                potential,
            } => handlers::analyze_tmssr::handle(&file, proportions, potential, cli.format),
        },

        Commands::Progress {
            summary,
            user,
            scenario,
        } => {
            let summary = summary.unwrap_or_else(|| data_dir.join(DEFAULT_SUMMARY_FILE));
            handlers::progress::handle(
                &summary,
                user.as_deref(),
                scenario.map(Into::into),
                cli.format,
            )
        }
    }
}

fn resolve_data_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Explicit flag or config value always wins; the conventional
/// `<data-dir>/highlow.csv` is used only when it actually exists, so a
/// fresh tree summarizes without label warnings.
fn resolve_labels(flag: Option<PathBuf>, config: &Config, data_dir: &Path) -> Option<PathBuf> {
    flag.or_else(|| config.labels.clone()).or_else(|| {
        let default = data_dir.join(DEFAULT_LABELS_FILE);
        default.exists().then_some(default)
    })
}

fn show_guidance(data_dir: &Path) -> Result<()> {
    println!("lessonplay - Lesson play transcript summarizer\n");

    if !data_dir.is_dir() {
        println!("Get started:");
        println!("  lessonplay init\n");
        println!("The init command will:");
        println!("  1. Create the transcript folders (Rehearsal, TeachingMethod)");
        println!("  2. Write a starter {} config", CONFIG_FILE);
        println!("  3. Show where to drop exported transcript CSVs\n");
    } else {
        println!("Quick commands:");
        println!("  lessonplay summarize                   # One summary row per session");
        println!("  lessonplay summarize --output summary.csv");
        println!("  lessonplay progress --user <NAME>      # Session-over-session chart data");
        println!("  lessonplay analyze potential <FILE>    # High/Low counts per session\n");
    }

    println!("For more commands:");
    println!("  lessonplay --help");

    Ok(())
}
