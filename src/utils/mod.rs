mod digest;
mod normalize;
mod sidecar;

pub use digest::{digest_bytes, digest_file, FileDigest};
pub use normalize::{collapse_spaces, normalize, to_int};
pub use sidecar::{read_sidecar, sidecar_path, write_sidecar};
