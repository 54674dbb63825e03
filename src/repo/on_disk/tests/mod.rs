use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;


// Inflate a loose object file back into its storage frame.
fn inflate(path: &Path) -> Vec<u8> {
    let compressed = std::fs::read(path).unwrap();
    let mut frame = Vec::new();
    ZlibDecoder::new(&compressed[..])
        .read_to_end(&mut frame)
        .unwrap();
    frame
}
