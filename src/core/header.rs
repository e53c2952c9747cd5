/// WAV format tag inspection and patching
///
/// Only the canonical header layout is understood: a 12 byte RIFF header
/// followed by the 8 byte `fmt ` chunk header, which puts the format tag at
/// byte 20. Nothing else in the file is validated, so a file with extra chunks
/// before `fmt ` is read at the wrong place (known limitation).

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// Standard uncompressed PCM
pub const WAVE_FORMAT_PCM: u16 = 0x0001;

/// WAVE_FORMAT_EXTENSIBLE
pub const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Byte offset of the format tag in a canonical header
pub const FORMAT_TAG_OFFSET: u64 = 20;

/// Smallest file that carries a complete format tag
pub const MIN_HEADER_LEN: u64 = FORMAT_TAG_OFFSET + 2;

/// Format tag wrapper used for log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTag(pub u16);

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            WAVE_FORMAT_PCM => write!(f, "PCM (0x0001)"),
            WAVE_FORMAT_EXTENSIBLE => write!(f, "EXTENSIBLE (0xFFFE)"),
            other => write!(f, "0x{:04X}", other),
        }
    }
}

/// What was found at the format tag offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCheck {
    /// The file ends before the tag is complete
    Short,
    /// Any tag other than WAVE_FORMAT_EXTENSIBLE
    Other(u16),
    /// WAVE_FORMAT_EXTENSIBLE (rewritten to PCM if patching was requested)
    Extensible,
}

impl TagCheck {
    pub fn is_extensible(&self) -> bool {
        matches!(self, TagCheck::Extensible)
    }
}

/// Read the little-endian format tag at offset 20.
///
/// Returns `Ok(None)` when the stream ends before two bytes are available.
pub fn read_format_tag<R: Read + Seek>(reader: &mut R) -> io::Result<Option<u16>> {
    reader.seek(SeekFrom::Start(FORMAT_TAG_OFFSET))?;
    match reader.read_u16::<LittleEndian>() {
        Ok(tag) => Ok(Some(tag)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Inspect the format tag and, when `patch` is set, overwrite an extensible
/// tag with PCM in place.
///
/// # Arguments
///
/// * `file` - Open handle, must be writable when `patch` is set
/// * `patch` - Whether to rewrite bytes 20-21 on a match
///
/// # Returns
///
/// The classification of the tag found before any write
pub fn inspect_and_patch<F: Read + Write + Seek>(file: &mut F, patch: bool) -> io::Result<TagCheck> {
    let tag = match read_format_tag(file)? {
        Some(tag) => tag,
        None => return Ok(TagCheck::Short),
    };

    if tag != WAVE_FORMAT_EXTENSIBLE {
        return Ok(TagCheck::Other(tag));
    }

    if patch {
        file.seek(SeekFrom::Current(-2))?;
        file.write_u16::<LittleEndian>(WAVE_FORMAT_PCM)?;
        file.flush()?;
    }

    Ok(TagCheck::Extensible)
}
