//! Command framing over a byte stream.
//!
//! The wire protocol is self-framing: the first byte of every command
//! is its kind tag, and each kind has a fixed length. An unknown tag
//! means the stream has lost sync, so it is a hard error rather than a
//! skippable command.

use std::io::Read;

use anyhow::{bail, Context};
use cyclone_gc_core::command::{InstructionKind, MAX_COMMAND_LEN};

/// Read the next complete wire command from `reader`.
///
/// Returns `Ok(None)` on a clean end of stream (EOF at a command
/// boundary).
pub fn read_command(reader: &mut impl Read) -> anyhow::Result<Option<Vec<u8>>> {
    let mut tag = [0u8; 1];
    match reader.read(&mut tag).context("reading command tag")? {
        0 => return Ok(None),
        _ => {}
    }

    let Some(kind) = InstructionKind::from_tag(tag[0]) else {
        bail!("stream desync: unknown command tag {:#04X}", tag[0]);
    };

    let mut buf = [0u8; MAX_COMMAND_LEN];
    let len = kind.wire_len();
    buf[0] = tag[0];
    reader
        .read_exact(&mut buf[1..len])
        .with_context(|| format!("reading {:?} command body", kind))?;
    Ok(Some(buf[..len].to_vec()))
}
