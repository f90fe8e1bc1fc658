pub mod assembler;
pub mod chooser;
pub mod isbn;
pub mod matcher;
pub mod organizer;
pub mod session;

pub use assembler::{AssembledVolume, Assembler, LocalFile};
pub use chooser::{Chooser, PromptChooser};
pub use isbn::{check_isbn, IsbnResult};
pub use matcher::{match_volume, VolumeMatch};
pub use organizer::{organize, FileOutcome, OrganizeReport};
