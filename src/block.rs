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
/// # Block
///
/// A `Block` is an immutable inverted index over a batch of up to 65,535
/// songs, stored as four parallel arrays chosen so the scorer's inner loop
/// is a tight scan over contiguous memory:
///
/// ```text
///
///     +-----------+--------------+--------------+----------------+
///     |  codes[n] | code_lengths | song_lengths  |  song_indices  |
///     +-----------+--------------+--------------+----------------+
///      ascending    posting-list   per-song set    posting lists,
///      distinct     length per     cardinality     concatenated in
///      codes        code                           `codes` order
///
/// ```
///
/// `song_indices` is the only array touched per matched code in the scorer,
/// and is packed as 16-bit local song indices to halve scan bandwidth; this
/// caps a single block at 65,535 songs, which is the sharding mechanism for
/// larger corpora (more, independently loadable, blocks).
///
/// Invariants (see `spec.md` §3):
/// 1. `codes` is strictly ascending.
/// 2. `sum(code_lengths) == song_indices.len()`.
/// 3. Every value in `song_indices` is in `[0, n_songs)`.
/// 4. For each song `s`, the number of posting entries pointing at `s`
///    equals `song_lengths[s]`.
/// 5. `song_lengths[s] >= 1` for non-empty songs; zero-length songs are
///    permitted and contribute no postings.
#[derive(Debug, Clone)]
pub struct Block {
    pub(crate) n_codes: u32,
    pub(crate) n_songs: u32,
    pub(crate) codes: Vec<u32>,
    pub(crate) code_lengths: Vec<u32>,
    pub(crate) song_lengths: Vec<u32>,
    pub(crate) song_indices: Vec<u16>,
}

impl Block {
    /// Caps a single block at this many songs: `song_indices` entries are
    /// 16-bit local indices. Changing this width breaks the on-disk format.
    pub const MAX_SONGS: u32 = 65_535;

    pub(crate) fn from_parts(
        n_songs: u32,
        codes: Vec<u32>,
        code_lengths: Vec<u32>,
        song_lengths: Vec<u32>,
        song_indices: Vec<u16>,
    ) -> Self {
        Block {
            n_codes: codes.len() as u32,
            n_songs,
            codes,
            code_lengths,
            song_lengths,
            song_indices,
        }
    }

    #[inline]
    pub fn n_codes(&self) -> u32 {
        self.n_codes
    }

    #[inline]
    pub fn n_songs(&self) -> u32 {
        self.n_songs
    }

    #[inline]
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    #[inline]
    pub fn code_lengths(&self) -> &[u32] {
        &self.code_lengths
    }

    #[inline]
    pub fn song_lengths(&self) -> &[u32] {
        &self.song_lengths
    }

    #[inline]
    pub fn song_indices(&self) -> &[u16] {
        &self.song_indices
    }
}

#[cfg(test)]
mod test_block {
    use super::*;

    #[test]
    fn test_accessors_reflect_parts() {
        let b = Block::from_parts(3, vec![1, 2, 3], vec![1, 1, 1], vec![1, 1, 1], vec![0, 1, 2]);
        assert_eq!(b.n_codes(), 3);
        assert_eq!(b.n_songs(), 3);
        assert_eq!(b.codes(), &[1, 2, 3]);
        assert_eq!(b.code_lengths(), &[1, 1, 1]);
        assert_eq!(b.song_lengths(), &[1, 1, 1]);
        assert_eq!(b.song_indices(), &[0, 1, 2]);
    }
}
