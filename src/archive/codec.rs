//! Container codec: compressed file <-> editable payload

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::types::{Payload, INNER_HEADER_SIZE, OUTER_HEADER_SIZE, SIZE_FIELD_OFFSETS};
use crate::error::{Error, Result};

/// Inflate a zlib stream.
fn decompress_bytes(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::CorruptArchive {
            reason: format!("zlib decompression failed: {e}"),
        })?;
    Ok(decompressed)
}

/// Deflate bytes back into a zlib stream.
fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

impl Payload {
    /// Decode a raw compressed archive into an editable payload.
    ///
    /// Splits off the 32-byte outer header, inflates the remainder, and
    /// splits the inflated stream into the 5-byte inner header and the body.
    ///
    /// # Errors
    /// Returns [`Error::CorruptArchive`] if the input is too short or the
    /// compressed stream is truncated or garbled.
    pub fn decode(basename: impl Into<String>, raw: &[u8]) -> Result<Self> {
        if raw.len() < OUTER_HEADER_SIZE {
            return Err(Error::CorruptArchive {
                reason: format!("file too short for outer header: {} bytes", raw.len()),
            });
        }
        let outer_header: [u8; OUTER_HEADER_SIZE] =
            raw[..OUTER_HEADER_SIZE].try_into().unwrap();

        let decompressed = decompress_bytes(&raw[OUTER_HEADER_SIZE..])?;
        if decompressed.len() < INNER_HEADER_SIZE {
            return Err(Error::CorruptArchive {
                reason: format!(
                    "decompressed stream too short for inner header: {} bytes",
                    decompressed.len()
                ),
            });
        }
        let inner_header: [u8; INNER_HEADER_SIZE] =
            decompressed[..INNER_HEADER_SIZE].try_into().unwrap();
        let body = decompressed[INNER_HEADER_SIZE..].to_vec();

        Ok(Self {
            basename: basename.into(),
            outer_header,
            inner_header,
            original_size: decompressed.len() as u32,
            body,
        })
    }

    /// Re-encode the payload into its compressed on-disk form.
    ///
    /// If the body size changed since decode, both redundant size fields in
    /// the outer header are rewritten first. No other header field is
    /// touched.
    pub fn encode(&mut self) -> Result<Vec<u8>> {
        let new_size = self.decompressed_size();
        if new_size != self.original_size {
            tracing::debug!(
                original = self.original_size,
                new = new_size,
                "body size changed, patching outer header"
            );
            for offset in SIZE_FIELD_OFFSETS {
                self.outer_header[offset..offset + 4].copy_from_slice(&new_size.to_le_bytes());
            }
        }

        let mut decompressed = Vec::with_capacity(new_size as usize);
        decompressed.extend_from_slice(&self.inner_header);
        decompressed.extend_from_slice(&self.body);

        let mut out = Vec::with_capacity(OUTER_HEADER_SIZE + decompressed.len() / 2);
        out.extend_from_slice(&self.outer_header);
        out.extend_from_slice(&compress_bytes(&decompressed)?);
        Ok(out)
    }

    /// Read and decode the archive at `path`.
    ///
    /// # Errors
    /// Returns [`Error::ArchiveNotFound`] if the path does not exist and
    /// [`Error::CorruptArchive`] if decoding fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ArchiveNotFound {
                path: path.to_path_buf(),
            });
        }
        let basename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

        tracing::debug!(path = %path.display(), "reading archive");
        let raw = std::fs::read(path)?;
        Self::decode(basename, &raw)
    }

    /// Re-encode and write the payload to `destination/<basename>`.
    ///
    /// The destination directory is created if missing. Returns the path
    /// that was written.
    pub fn save(&mut self, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let encoded = self.encode()?;
        let destination = destination.as_ref();
        std::fs::create_dir_all(destination)?;
        let out_path = destination.join(&self.basename);
        std::fs::write(&out_path, encoded)?;
        tracing::info!(path = %out_path.display(), "saved modded archive");
        Ok(out_path)
    }
}
