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

//! In-memory inverted-index engine for audio fingerprint nearest-neighbor
//! search.
//!
//! A [`Block`] is an immutable inverted index over a batch of up to 65,535
//! songs; an [`Index`] is an ordered collection of blocks with an implied
//! global-song-id scheme. [`build_and_write_block`] inverts a batch of
//! per-song code sequences and writes the result to disk; [`Index::load`]
//! reads an ordered list of block files back into memory; [`Index::query`]
//! ranks the index's songs against a query fingerprint under one of three
//! [`Similarity`] measures.
//!
//! The engine is a pure library: it has no network layer, no host-language
//! binding, and performs no fingerprint extraction from audio. It does not
//! mutate a loaded index, compact or merge blocks, or persist the ordered
//! list of block paths that make up an index — the caller owns that list.

#[macro_use]
extern crate log;

mod block;
mod builder;
mod codec;
mod codes;
mod error;
mod index;
mod ranker;
mod scorer;
mod util;

pub use block::Block;
pub use builder::{build_and_write_block, build_block};
pub use error::{IndexError, Status};
pub use index::Index;
pub use scorer::Similarity;

/// Default top-K result count used when a caller does not override it, per
/// the engine's public surface (`query(.., K=10)`).
pub const DEFAULT_TOP_K: usize = 10;
