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

//! An ordered, read-only collection of [`Block`]s.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::block::Block;
use crate::codec;
use crate::codes::normalize;
use crate::error::IndexError;
use crate::ranker::TopKRanker;
use crate::scorer::{score_block, Similarity};

/// An ordered sequence of `Block`s. The global song id for local index `i`
/// in block `b` is `i + sum(blocks[k].n_songs for k < b)`. Read-only once
/// loaded: the index owns its blocks exclusively, and closing it (dropping
/// it) releases every block's arrays. No manifest is persisted — the caller
/// supplies the ordered list of block paths on every load, and reordering
/// that list produces a different global-id assignment.
pub struct Index {
    blocks: Vec<Block>,
}

impl Index {
    /// Loads an `Index` from an ordered list of block-file paths. If any
    /// path cannot be opened or fully read, no partial `Index` is returned.
    pub fn load<P: AsRef<Path>>(ordered_paths: &[P]) -> Result<Index, IndexError> {
        let mut blocks = Vec::with_capacity(ordered_paths.len());
        for path in ordered_paths {
            let path = path.as_ref();
            let file = File::open(path)
                .map_err(|e| IndexError::load_failed(format!("{}: {}", path.display(), e)))?;
            let mut reader = BufReader::new(file);
            let block = codec::read_block(&mut reader)
                .map_err(|e| IndexError::load_failed(format!("{}: {}", path.display(), e)))?;
            debug!(
                "loaded block from {} ({} songs, {} codes)",
                path.display(),
                block.n_songs(),
                block.n_codes()
            );
            blocks.push(block);
        }
        debug!(
            "assembled index of {} blocks, {} total songs",
            blocks.len(),
            blocks.iter().map(|b| b.n_songs() as u64).sum::<u64>()
        );
        Ok(Index { blocks })
    }

    /// Total number of songs across all blocks.
    pub fn song_count(&self) -> u32 {
        self.blocks.iter().map(|b| b.n_songs()).sum()
    }

    /// Normalizes `codes`, scores every block against it, and returns the
    /// top `k` `(global_song_id, score)` pairs, sorted descending by score
    /// with ties broken by ascending global id. An empty (post-normalize)
    /// query yields zero results. Never fails once the `Index` is in hand.
    pub fn query(&self, codes: &[u32], similarity: Similarity, k: usize) -> Vec<(u32, f32)> {
        let mut query: Vec<u32> = codes.to_vec();
        normalize(&mut query);

        let mut ranker = TopKRanker::new(k);
        if query.is_empty() {
            return ranker.results();
        }

        let mut scratch = Vec::new();
        let mut base: u32 = 0;
        for block in &self.blocks {
            score_block(&query, block, similarity, &mut scratch);
            for (i, &score) in scratch.iter().enumerate() {
                ranker.offer(score, base + i as u32);
            }
            base += block.n_songs();
        }
        ranker.results()
    }
}
