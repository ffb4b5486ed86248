use crate::config::Config;
use anyhow::Result;
use lessonplay_types::LessonType;
use std::path::Path;

pub fn handle(data_dir: &Path, config_path: &Path) -> Result<()> {
    println!("Initializing lessonplay...\n");

    for lesson in LessonType::ALL {
        let dir = data_dir.join(lesson.as_str());
        if dir.is_dir() {
            println!("  exists   {}", dir.display());
        } else {
            std::fs::create_dir_all(&dir)?;
            println!("  created  {}", dir.display());
        }
    }

    if config_path.exists() {
        println!("  exists   {}", config_path.display());
    } else {
        let config = Config {
            data_dir: Some(data_dir.to_path_buf()),
            labels: None,
        };
        config.save_to(config_path)?;
        println!("  created  {}", config_path.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Drop exported transcript CSVs into the lesson folders");
    println!("  2. Run 'lessonplay summarize' to build the session table");
    println!(
        "  3. Run 'lessonplay summarize --output {}' to export it",
        data_dir.join("summary.csv").display()
    );

    Ok(())
}
