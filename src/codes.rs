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

//! Collapses a sequence of codes into a strictly ascending set, in place.

/// Sorts `seq` ascending and removes duplicates, in place.
///
/// After this call `seq` is a strictly ascending sequence of distinct
/// values. O(n log n).
#[inline]
pub fn normalize(seq: &mut Vec<u32>) {
    seq.sort_unstable();
    seq.dedup();
}
