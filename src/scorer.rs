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

//! Per-block similarity scoring: a two-pointer merge over the query and a
//! block's sorted distinct codes, producing one score per song in the block.

use crate::block::Block;

/// Which set-based similarity measure to normalize the raw intersection
/// count by. Modeled as a tagged enum rather than a function pointer or
/// trait object, so the merge's hot inner loop stays monomorphic — only
/// the final per-song normalization branches on it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Similarity {
    /// `|Q ∩ S|`, the raw intersection count.
    SetIntersection,
    /// `|Q ∩ S| / |Q|`, the fraction of query codes matched.
    SetIntersectionNormByQueryLen,
    /// `|Q ∩ S| / |Q ∪ S|`.
    Jaccard,
}

/// Computes one similarity score per song in `block` against the normalized
/// query set `query` (ascending, distinct). `scratch` is reused across
/// calls by the caller and resized (not reallocated) to `block.n_songs()`.
///
/// Two-pointer merge over `query` and `block.codes()`, both ascending:
/// whenever the pointers match on a code, every song in that code's
/// posting list gets `+1` raw score. O(|query| + matched postings).
pub fn score_block(query: &[u32], block: &Block, similarity: Similarity, scratch: &mut Vec<f32>) {
    let n_songs = block.n_songs() as usize;
    scratch.clear();
    scratch.resize(n_songs, 0.0);

    let codes = block.codes();
    let code_lengths = block.code_lengths();
    let song_indices = block.song_indices();

    let mut i = 0usize; // cursor in codes
    let mut j = 0usize; // cursor in query
    let mut offset = 0usize; // running offset into song_indices
    while j < query.len() && i < codes.len() {
        if query[j] == codes[i] {
            let len = code_lengths[i] as usize;
            for k in 0..len {
                let song = song_indices[offset + k] as usize;
                scratch[song] += 1.0;
            }
            i += 1;
            j += 1;
            offset += len;
        } else if query[j] < codes[i] {
            j += 1;
        } else {
            offset += code_lengths[i] as usize;
            i += 1;
        }
    }

    let query_len = query.len() as f32;
    let song_lengths = block.song_lengths();
    for (s, score) in scratch.iter_mut().enumerate() {
        let num = *score;
        let den = match similarity {
            Similarity::SetIntersection => 1.0,
            Similarity::SetIntersectionNormByQueryLen => query_len,
            Similarity::Jaccard => {
                let d = query_len + song_lengths[s] as f32 - num;
                if d == 0.0 {
                    1.0
                } else {
                    d
                }
            }
        };
        *score = num / den;
    }
}

#[cfg(test)]
mod test_scorer {
    use super::*;

    fn worked_example_block() -> Block {
        Block::from_parts(
            3,
            vec![1, 2, 3, 4, 5, 6],
            vec![1, 2, 2, 1, 1, 1],
            vec![3, 3, 2],
            vec![0, 0, 1, 0, 1, 1, 2, 2],
        )
    }

    #[test]
    fn test_set_intersection() {
        let block = worked_example_block();
        let mut scratch = Vec::new();
        score_block(&[1, 2, 3], &block, Similarity::SetIntersection, &mut scratch);
        assert_eq!(scratch, vec![3.0, 2.0, 0.0]);
    }

    #[test]
    fn test_jaccard() {
        let block = worked_example_block();
        let mut scratch = Vec::new();
        score_block(&[1, 2, 3], &block, Similarity::Jaccard, &mut scratch);
        assert_eq!(scratch[0], 1.0);
        assert_eq!(scratch[1], 0.5);
        assert_eq!(scratch[2], 0.0);
    }

    #[test]
    fn test_norm_by_query_len() {
        let block = worked_example_block();
        let mut scratch = Vec::new();
        score_block(
            &[2, 3],
            &block,
            Similarity::SetIntersectionNormByQueryLen,
            &mut scratch,
        );
        assert_eq!(scratch, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_jaccard_exact_set_match() {
        let block = worked_example_block();
        let mut scratch = Vec::new();
        // duplicate codes in the query are irrelevant: caller normalizes first
        score_block(&[5, 6], &block, Similarity::Jaccard, &mut scratch);
        assert_eq!(scratch[2], 1.0);
        assert_eq!(scratch[0], 0.0);
        assert_eq!(scratch[1], 0.0);
    }

    #[test]
    fn test_empty_query_scores_all_zero() {
        let block = worked_example_block();
        let mut scratch = Vec::new();
        score_block(&[], &block, Similarity::SetIntersection, &mut scratch);
        assert_eq!(scratch, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scratch_buffer_is_reused_across_calls() {
        let block = worked_example_block();
        let mut scratch = vec![99.0; 7]; // stale, wrong-sized data from a prior block
        score_block(&[1, 2, 3], &block, Similarity::SetIntersection, &mut scratch);
        assert_eq!(scratch.len(), 3);
        assert_eq!(scratch, vec![3.0, 2.0, 0.0]);
    }
}
