mod labels;
mod lesson;
mod record;
mod tmssr;

pub use labels::*;
pub use lesson::*;
pub use record::*;
pub use tmssr::*;
