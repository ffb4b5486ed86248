use crate::error::{Error, Result};
use lessonplay_types::LessonType;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A transcript file found under the data root, tagged with its lesson type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTranscript {
    pub path: PathBuf,
    pub lesson: LessonType,
}

/// Walk `<base>/Rehearsal` and `<base>/TeachingMethod` for `.csv` files.
///
/// Entries come back in name-sorted order per directory so repeated runs
/// see the same sequence. A missing lesson folder is skipped; only a
/// missing base directory is an error.
pub fn discover_transcripts(base_dir: &Path) -> Result<Vec<DiscoveredTranscript>> {
    if !base_dir.is_dir() {
        return Err(Error::MissingRoot(base_dir.to_path_buf()));
    }

    let mut found = Vec::new();
    for lesson in LessonType::ALL {
        let lesson_root = base_dir.join(lesson.as_str());
        if !lesson_root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&lesson_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "csv") {
                continue;
            }
            found.push(DiscoveredTranscript {
                path: path.to_path_buf(),
                lesson,
            });
        }
    }

    Ok(found)
}
