use std::{fs, io::Read, path::Path};

use assert_cmd::Command;
use flate2::read::ZlibDecoder;

// Build a `pit` command rooted at `path` with a fixed author identity.
#[allow(dead_code)]
pub fn pit_in(path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pit").unwrap();
    cmd.current_dir(path)
        .env("GIT_AUTHOR_NAME", "Thor")
        .env("GIT_AUTHOR_EMAIL", "author@example.com")
        .env_remove("RUST_LOG");
    cmd
}

// Read and inflate the loose object with the given hex ID.
#[allow(dead_code)]
pub fn read_object(path: &Path, id: &str) -> Vec<u8> {
    let object_path = path.join(".git/objects").join(&id[..2]).join(&id[2..]);
    let compressed = fs::read(object_path).unwrap();

    let mut frame = Vec::new();
    ZlibDecoder::new(&compressed[..])
        .read_to_end(&mut frame)
        .unwrap();
    frame
}

// Split a frame into its header and content, checking the declared length.
#[allow(dead_code)]
pub fn split_frame(frame: &[u8]) -> (String, Vec<u8>) {
    let nul = frame.iter().position(|b| *b == 0).unwrap();
    let header = String::from_utf8(frame[..nul].to_vec()).unwrap();
    let content = frame[nul + 1..].to_vec();

    let mut parts = header.splitn(2, ' ');
    let kind = parts.next().unwrap().to_string();
    let len: usize = parts.next().unwrap().parse().unwrap();
    assert_eq!(len, content.len());

    (kind, content)
}
