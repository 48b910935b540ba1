//! Content hashing used by the change-gated copy machinery.
use crate::errors::{BuildError, BuildResult};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Hashes a file and returns the hash as a string.
pub fn hash_file(path: &Path) -> BuildResult<String> {
    const CHUNK_SIZE: usize = 1024 * 1024;

    let mut file = File::open(path).map_err(|why| BuildError::io(path, why))?;
    let mut limit = file
        .metadata()
        .map_err(|why| BuildError::io(path, why))?
        .len();
    let mut buffer = [0; CHUNK_SIZE];
    let mut hasher = Sha1::new();

    while limit > 0 {
        let read_size = if limit < CHUNK_SIZE as u64 {
            limit as usize
        } else {
            CHUNK_SIZE
        };
        let read = file
            .read(&mut buffer[0..read_size])
            .map_err(|why| BuildError::io(path, why))?;
        if read == 0 {
            break;
        }
        limit -= read as u64;
        hasher.update(&buffer[0..read]);
    }
    let result = hasher.finalize();
    let mut hash = String::new();
    for byte in result {
        hash.push_str(&format!("{:02x}", byte));
    }
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn identical_content_hashes_equal() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.h");
        let b = dir.path().join("b.h");
        std::fs::File::create(&a)
            .unwrap()
            .write_all(b"#define BURGER 1\n")
            .unwrap();
        std::fs::File::create(&b)
            .unwrap()
            .write_all(b"#define BURGER 1\n")
            .unwrap();
        assert_eq!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn different_content_hashes_differ() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.h");
        let b = dir.path().join("b.h");
        std::fs::write(&a, b"#define BURGER 1\n").unwrap();
        std::fs::write(&b, b"#define BURGER 2\n").unwrap();
        assert_ne!(hash_file(&a).unwrap(), hash_file(&b).unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(hash_file(&dir.path().join("nope.h")).is_err());
    }
}
