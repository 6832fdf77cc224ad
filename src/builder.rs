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

//! Inverts a batch of per-song code sequences into a [`Block`].

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::block::Block;
use crate::codec;
use crate::codes::normalize;
use crate::error::IndexError;

/// Builds a `Block` from `songs_codes`, one code sequence per song.
///
/// If `already_sorted_distinct` is false, each song's sequence is first
/// normalized in place (sorted ascending, deduplicated). The steps below
/// follow `spec.md` §4.2 exactly:
///
/// 1. normalize every song's sequence (unless already normalized)
/// 2. `codes` = normalize(concat of every song's set)
/// 3. for each distinct code, count how many songs contain it
///    (`code_lengths`), by walking each song's sorted set against `codes`
///    with a cursor that only ever advances
/// 4. prefix-sum `code_lengths` into offsets
/// 5. walk the songs again, writing each song's local index into the
///    posting list of every code it contains, advancing the per-code offset
/// 6. `song_lengths` is each song's post-normalize set cardinality
///
/// Returns [`IndexError::InvalidInput`](crate::error::Status::InvalidInput)
/// if `songs_codes.len()` exceeds [`Block::MAX_SONGS`].
pub fn build_block(
    mut songs_codes: Vec<Vec<u32>>,
    already_sorted_distinct: bool,
) -> Result<Block, IndexError> {
    let n_songs = songs_codes.len();
    if n_songs as u64 > Block::MAX_SONGS as u64 {
        return Err(IndexError::invalid_input(format!(
            "block has {} songs, exceeds the 16-bit song-index limit of {}",
            n_songs,
            Block::MAX_SONGS
        )));
    }

    if !already_sorted_distinct {
        for song in songs_codes.iter_mut() {
            normalize(song);
        }
    }

    let song_lengths: Vec<u32> = songs_codes.iter().map(|s| s.len() as u32).collect();

    let mut codes: Vec<u32> = songs_codes.iter().flatten().copied().collect();
    normalize(&mut codes);
    let n_codes = codes.len();

    debug!(
        "building block from {} songs, {} distinct codes",
        n_songs, n_codes
    );

    // code_lengths[i]: number of songs whose set contains codes[i], found by
    // walking each song's ascending set against `codes` with a monotonic
    // cursor (both sides sorted, so the cursor never backtracks).
    let mut code_lengths = vec![0u32; n_codes];
    for song in &songs_codes {
        let mut offset = 0usize;
        for &code in song {
            while codes[offset] != code {
                offset += 1;
            }
            code_lengths[offset] += 1;
        }
    }

    let mut code_offsets = vec![0u32; n_codes];
    let mut running = 0u32;
    for i in 0..n_codes {
        code_offsets[i] = running;
        running += code_lengths[i];
    }
    let total_postings = running as usize;

    let mut song_indices = vec![0u16; total_postings];
    for (i, song) in songs_codes.iter().enumerate() {
        let mut offset = 0usize;
        for &code in song {
            while codes[offset] != code {
                offset += 1;
            }
            let pos = code_offsets[offset] as usize;
            song_indices[pos] = i as u16;
            code_offsets[offset] += 1;
        }
    }

    Ok(Block::from_parts(
        n_songs as u32,
        codes,
        code_lengths,
        song_lengths,
        song_indices,
    ))
}

/// Builds a block from `songs_codes` and writes it to `path` (§4.3 wire
/// format), opening, writing, and closing the file in one atomic-looking
/// call from the caller's perspective.
pub fn build_and_write_block(
    songs_codes: Vec<Vec<u32>>,
    path: impl AsRef<Path>,
    already_sorted_distinct: bool,
) -> Result<(), IndexError> {
    let block = build_block(songs_codes, already_sorted_distinct)?;
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| IndexError::write_failed(format!("{}: {}", path.display(), e)))?;
    let mut w = BufWriter::new(file);
    codec::write_block(&block, &mut w)
        .map_err(|e| IndexError::write_failed(format!("{}: {}", path.display(), e)))?;
    debug!(
        "wrote block ({} songs, {} codes) to {}",
        block.n_songs(),
        block.n_codes(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod test_builder {
    use super::*;

    fn worked_example() -> Vec<Vec<u32>> {
        vec![vec![1, 2, 3], vec![2, 3, 4], vec![5, 6]]
    }

    #[test]
    fn test_matches_spec_worked_example() {
        let block = build_block(worked_example(), false).unwrap();
        assert_eq!(block.n_codes(), 6);
        assert_eq!(block.n_songs(), 3);
        assert_eq!(block.codes(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(block.code_lengths(), &[1, 2, 2, 1, 1, 1]);
        assert_eq!(block.song_lengths(), &[3, 3, 2]);
        assert_eq!(block.song_indices(), &[0, 0, 1, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_already_sorted_distinct_hint_skips_normalization() {
        let songs = worked_example();
        let a = build_block(songs.clone(), false).unwrap();
        let b = build_block(songs, true).unwrap();
        assert_eq!(a.codes(), b.codes());
        assert_eq!(a.code_lengths(), b.code_lengths());
        assert_eq!(a.song_indices(), b.song_indices());
    }

    #[test]
    fn test_unsorted_duplicate_input_is_normalized() {
        let songs = vec![vec![3, 1, 2, 1], vec![4, 3, 2]];
        let block = build_block(songs, false).unwrap();
        assert_eq!(block.codes(), &[1, 2, 3, 4]);
        assert_eq!(block.song_lengths(), &[3, 3]);
    }

    #[test]
    fn test_too_many_songs_is_invalid_input() {
        let songs: Vec<Vec<u32>> = (0..(Block::MAX_SONGS as usize + 1))
            .map(|_| vec![1u32])
            .collect();
        let err = build_block(songs, true).unwrap_err();
        assert_eq!(err.status(), crate::error::Status::InvalidInput);
    }

    #[test]
    fn test_zero_length_song_contributes_no_postings() {
        let songs = vec![vec![1, 2], vec![]];
        let block = build_block(songs, false).unwrap();
        assert_eq!(block.song_lengths(), &[2, 0]);
        assert!(!block.song_indices().contains(&1));
    }

    #[test]
    fn test_max_songs_boundary_is_accepted() {
        let songs: Vec<Vec<u32>> = (0..(Block::MAX_SONGS as usize))
            .map(|i| vec![i as u32])
            .collect();
        let block = build_block(songs, true).unwrap();
        assert_eq!(block.n_songs(), Block::MAX_SONGS);
    }
}
