//! Raw sample array files: flat little-endian f32, no header.
//!
//! This is the interchange format on both pipeline boundaries: the decode
//! collaborator writes one, the plotting collaborator reads five.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Read a whole raw f32 file into memory.
///
/// Fails with `InvalidData` when the byte length is not a multiple of 4.
pub fn read_samples(path: impl AsRef<Path>) -> io::Result<Vec<f32>> {
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;
    if bytes.len() % 4 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("raw f32 stream of {} bytes is not a multiple of 4", bytes.len()),
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Write samples as a raw little-endian f32 file.
pub fn write_samples(path: impl AsRef<Path>, samples: &[f32]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for &sample in samples {
        writer.write_all(&sample.to_le_bytes())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.raw");
        let samples = vec![0.0f32, 1.0, -1.0, 0.5, f32::MIN_POSITIVE, -0.25];

        write_samples(&path, &samples).unwrap();
        let back = read_samples(&path).unwrap();

        assert_eq!(back.len(), samples.len());
        for (a, b) in samples.iter().zip(&back) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn truncated_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.raw");
        std::fs::write(&path, [0u8, 1, 2]).unwrap();

        let err = read_samples(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn empty_file_reads_as_empty_signal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.raw");
        std::fs::write(&path, []).unwrap();
        assert!(read_samples(&path).unwrap().is_empty());
    }
}
