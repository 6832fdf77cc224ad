// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

///
/// # Block wire format
///
/// Little-endian, no padding, no header magic and no checksum: this is a
/// compatibility requirement (§6), the reader must trust the writer.
///
/// ```text
///
///     +----------+----------+----------------+--------------------+--------------------+---------------------+
///     | n_codes  | n_songs  | codes[n_codes] | code_lengths[n_codes] | song_lengths[n_songs] | song_indices[sum]  |
///     |  (u32)   |  (u32)   |      (u32)      |        (u32)        |         (u32)       |        (u16)        |
///     +----------+----------+----------------+--------------------+--------------------+---------------------+
///
/// ```
///
/// `sum(code_lengths)` is computed from the `code_lengths` array only after
/// it has been read back, so the final array can be sized without a stored
/// length field.
use std::io::{self, Read, Write};

use crate::block::Block;
use crate::util::coding::{decode_fixed_u16, decode_fixed_u32, put_fixed_u16, put_fixed_u32};

/// Serializes `block` to `w` in the format documented above.
pub fn write_block<W: Write>(block: &Block, w: &mut W) -> io::Result<()> {
    let mut buf = Vec::with_capacity(
        4 * (2 + 2 * block.codes().len() + block.song_lengths().len())
            + 2 * block.song_indices().len(),
    );
    put_fixed_u32(&mut buf, block.n_codes());
    put_fixed_u32(&mut buf, block.n_songs());
    for &c in block.codes() {
        put_fixed_u32(&mut buf, c);
    }
    for &l in block.code_lengths() {
        put_fixed_u32(&mut buf, l);
    }
    for &l in block.song_lengths() {
        put_fixed_u32(&mut buf, l);
    }
    for &idx in block.song_indices() {
        put_fixed_u16(&mut buf, idx);
    }
    w.write_all(&buf)
}

/// Loads one `Block` from `r`. Does not validate the invariants in §3; it is
/// the caller's contract that `r` was produced by [`write_block`].
pub fn read_block<R: Read>(r: &mut R) -> io::Result<Block> {
    let n_codes = read_u32(r)? as usize;
    let n_songs = read_u32(r)? as usize;

    let codes = read_u32_array(r, n_codes)?;
    let code_lengths = read_u32_array(r, n_codes)?;
    let song_lengths = read_u32_array(r, n_songs)?;

    let total_postings: u64 = code_lengths.iter().map(|&l| l as u64).sum();
    let song_indices = read_u16_array(r, total_postings as usize)?;

    Ok(Block::from_parts(
        n_songs as u32,
        codes,
        code_lengths,
        song_lengths,
        song_indices,
    ))
}

fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(decode_fixed_u32(&buf))
}

fn read_u32_array<R: Read>(r: &mut R, count: usize) -> io::Result<Vec<u32>> {
    let mut buf = vec![0u8; count * 4];
    r.read_exact(&mut buf)?;
    Ok(buf.chunks_exact(4).map(decode_fixed_u32).collect())
}

fn read_u16_array<R: Read>(r: &mut R, count: usize) -> io::Result<Vec<u16>> {
    let mut buf = vec![0u8; count * 2];
    r.read_exact(&mut buf)?;
    Ok(buf.chunks_exact(2).map(decode_fixed_u16).collect())
}
