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

//! Fixed-capacity descending top-K buffer.

/// Holds the best `K` `(global_song_id, score)` pairs seen so far, sorted
/// descending by score. Unfilled slots carry the sentinel score `-1.0`,
/// which is distinguishable from any real similarity (all real similarities
/// are `>= 0`), so "effective result count" is just a count of non-sentinel
/// slots.
///
/// Candidates arrive in ascending global-id order (one block at a time, in
/// block order, ascending local index within a block). The insertion point
/// is the first position (scanning from the front) whose current entry is
/// strictly less than the new score, so a later candidate with a score
/// equal to an existing entry is placed after it rather than displacing it
/// — ties therefore resolve to "first arrival wins", i.e. ascending global
/// id, matching the externally observable ordering this engine guarantees.
pub struct TopKRanker {
    scores: Vec<f32>,
    ids: Vec<u32>,
}

impl TopKRanker {
    pub fn new(k: usize) -> Self {
        TopKRanker {
            scores: vec![-1.0; k],
            ids: vec![0; k],
        }
    }

    /// Offers `(score, id)` for inclusion. Finds the smallest position `p`
    /// such that `scores[p] < score` (walking from the front) and, if `p`
    /// is within capacity, shifts `[p, k)` right by one and writes
    /// `(score, id)` at `p`.
    pub fn offer(&mut self, score: f32, id: u32) {
        let k = self.scores.len();
        if k == 0 {
            return;
        }
        let mut p = 0;
        while p < k && self.scores[p] >= score {
            p += 1;
        }
        if p < k {
            for n in (p + 1..k).rev() {
                self.scores[n] = self.scores[n - 1];
                self.ids[n] = self.ids[n - 1];
            }
            self.scores[p] = score;
            self.ids[p] = id;
        }
    }

    /// Returns the results held so far, descending by score, excluding
    /// sentinel slots.
    pub fn results(&self) -> Vec<(u32, f32)> {
        self.scores
            .iter()
            .zip(self.ids.iter())
            .take_while(|(&s, _)| s >= 0.0)
            .map(|(&s, &id)| (id, s))
            .collect()
    }
}

#[cfg(test)]
mod test_ranker {
    use super::*;

    #[test]
    fn test_basic_descending_order() {
        let mut r = TopKRanker::new(3);
        r.offer(1.0, 0);
        r.offer(3.0, 1);
        r.offer(2.0, 2);
        assert_eq!(r.results(), vec![(1, 3.0), (2, 2.0), (0, 1.0)]);
    }

    #[test]
    fn test_overflow_drops_lowest() {
        let mut r = TopKRanker::new(2);
        r.offer(1.0, 0);
        r.offer(3.0, 1);
        r.offer(2.0, 2);
        assert_eq!(r.results(), vec![(1, 3.0), (2, 2.0)]);
    }

    #[test]
    fn test_equal_scores_first_arrival_wins() {
        let mut r = TopKRanker::new(2);
        r.offer(1.0, 0);
        r.offer(1.0, 1); // arrives later with an equal score, should not displace id 0
        assert_eq!(r.results(), vec![(0, 1.0), (1, 1.0)]);
    }

    #[test]
    fn test_effective_count_excludes_sentinels() {
        let mut r = TopKRanker::new(5);
        r.offer(0.5, 0);
        r.offer(0.1, 1);
        assert_eq!(r.results().len(), 2);
    }

    #[test]
    fn test_zero_score_is_a_real_result_not_a_sentinel() {
        let mut r = TopKRanker::new(3);
        r.offer(0.0, 0);
        assert_eq!(r.results(), vec![(0, 0.0)]);
    }

    #[test]
    fn test_zero_capacity_ranker_returns_nothing() {
        let mut r = TopKRanker::new(0);
        r.offer(5.0, 0);
        assert!(r.results().is_empty());
    }
}
