use crate::types::{LessonArg, OutputFormat, ScenarioArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lessonplay")]
#[command(about = "Summarize and analyze lesson play transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Transcript root holding the Rehearsal/ and TeachingMethod/ folders"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(long, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the transcript folder layout and a starter config")]
    Init,

    #[command(about = "Aggregate transcripts into one summary row per session")]
    Summarize {
        #[arg(long, help = "High/Low label table (defaults to <data-dir>/highlow.csv)")]
        labels: Option<PathBuf>,

        #[arg(long, help = "Also write the summary CSV to this path")]
        output: Option<PathBuf>,

        #[arg(long)]
        lesson: Option<LessonArg>,

        #[arg(long)]
        scenario: Option<ScenarioArg>,

        #[arg(long)]
        user: Option<String>,

        #[arg(long, help = "Keep sessions with zero teacher messages")]
        include_empty: bool,
    },

    #[command(about = "Analyze annotated utterance tables")]
    Analyze {
        #[command(subcommand)]
        command: AnalyzeCommand,
    },

    #[command(about = "Chart per-user session progress from a written summary")]
    Progress {
        #[arg(long, help = "Summary CSV (defaults to <data-dir>/summary.csv)")]
        summary: Option<PathBuf>,

        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        scenario: Option<ScenarioArg>,
    },
}

#[derive(Subcommand)]
pub enum AnalyzeCommand {
    #[command(about = "High/Low utterance counts per session")]
    Potential { file: PathBuf },

    #[command(about = "TMSSR teacher-move counts per session")]
    Tmssr {
        file: PathBuf,

        #[arg(long, help = "Show each category as a share of the session total")]
        proportions: bool,

        #[arg(long, help = "Cross categories with High/Low ratings")]
        potential: bool,
    },
}
