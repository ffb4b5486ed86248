pub mod counter;
pub mod datetime;
pub mod discovery;
pub mod error;
pub mod profile;
pub mod scenario;
pub mod schema;
pub mod table;

pub use counter::{MessageCounts, count_teacher_messages};
pub use datetime::{SessionStamp, parse_stamp, parse_stamp_from_filename};
pub use discovery::{DiscoveredTranscript, discover_transcripts};
pub use error::{Error, Result};
pub use profile::{TranscriptProfile, profile_transcript};
pub use scenario::classify_scenario;
pub use table::RawTranscript;
