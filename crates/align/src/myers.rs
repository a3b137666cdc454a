//! crates/align/src/myers.rs
//!
//! Linear-space Myers alignment ("An O(ND) Difference Algorithm and Its
//! Variations", section 4b).
//!
//! Coordinates inside [`Aligner::middle_snake`] are relative to the current
//! sub-problem: `x` indexes the base slice, `y` the target slice, and
//! diagonal `k = x - y`. The backward search runs on the reversed slices, so
//! its diagonal `k'` corresponds to forward diagonal `delta - k'` where
//! `delta = n - m`.

use std::ops::{Index, IndexMut, Range};

use crate::run::Run;
#[cfg(test)]
use crate::run::RunKind;

/// Furthest-reaching `x` per diagonal, addressable by negative diagonals.
///
/// Starts empty and grows with the number of search rounds, so its size
/// tracks the edit distance rather than the input length.
struct Frontier {
    radius: usize,
    slots: Vec<isize>,
}

impl Frontier {
    const fn new() -> Self {
        Self {
            radius: 0,
            slots: Vec::new(),
        }
    }

    /// Makes diagonals `-radius..=radius` addressable, keeping every stored
    /// value on its diagonal.
    fn reserve(&mut self, radius: usize) {
        if radius <= self.radius && !self.slots.is_empty() {
            return;
        }
        let grown = radius.max(self.radius.saturating_mul(2));
        let shift = grown - self.radius;
        let mut slots = vec![0; 2 * grown + 1];
        slots[shift..shift + self.slots.len()].copy_from_slice(&self.slots);
        self.radius = grown;
        self.slots = slots;
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.slots[(self.radius as isize + k) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.slots[(self.radius as isize + k) as usize]
    }
}

/// Upper bound on the number of `d` rounds a middle-snake search over an
/// `n` by `m` region can take.
const fn max_d(n: usize, m: usize) -> usize {
    (n + m).div_ceil(2) + 1
}

struct Aligner<'a> {
    base: &'a [u8],
    target: &'a [u8],
    forward: Frontier,
    backward: Frontier,
    runs: Vec<Run>,
}

/// Aligns `base` with `target`, returning runs in left-to-right order.
pub(crate) fn align(base: &[u8], target: &[u8]) -> Vec<Run> {
    let mut aligner = Aligner::new(base, target);
    aligner.conquer(0..base.len(), 0..target.len());
    aligner.runs
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

impl<'a> Aligner<'a> {
    const fn new(base: &'a [u8], target: &'a [u8]) -> Self {
        Self {
            base,
            target,
            forward: Frontier::new(),
            backward: Frontier::new(),
            runs: Vec::new(),
        }
    }

    fn push(&mut self, run: Run) {
        if run.len == 0 {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.kind == run.kind && last.continues(&run) {
                last.len += run.len;
                return;
            }
        }
        self.runs.push(run);
    }

    fn conquer(&mut self, mut base: Range<usize>, mut target: Range<usize>) {
        let prefix = common_prefix_len(&self.base[base.clone()], &self.target[target.clone()]);
        self.push(Run::equal(base.start, target.start, prefix));
        base.start += prefix;
        target.start += prefix;

        let suffix = common_suffix_len(&self.base[base.clone()], &self.target[target.clone()]);
        base.end -= suffix;
        target.end -= suffix;

        if base.is_empty() {
            self.push(Run::insert(base.start, target.start, target.len()));
        } else if target.is_empty() {
            self.push(Run::delete(base.start, target.start, base.len()));
        } else if let Some((x, y)) = self.middle_snake(base.clone(), target.clone()) {
            logging::trace_align!(
                "split {:?} x {:?} at ({}, {})",
                base,
                target,
                base.start + x,
                target.start + y
            );
            self.conquer(base.start..base.start + x, target.start..target.start + y);
            self.conquer(base.start + x..base.end, target.start + y..target.end);
        } else {
            self.push(Run::delete(base.start, target.start, base.len()));
            self.push(Run::insert(base.end, target.start, target.len()));
        }

        self.push(Run::equal(base.end, target.end, suffix));
    }

    /// Finds a point on an optimal path through the region that splits it
    /// into two strictly smaller sub-problems.
    ///
    /// Both ranges must be non-empty and share no common prefix or suffix.
    fn middle_snake(&mut self, base: Range<usize>, target: Range<usize>) -> Option<(usize, usize)> {
        let a = &self.base[base];
        let b = &self.target[target];
        let n = a.len() as isize;
        let m = b.len() as isize;
        let delta = n - m;
        let odd = delta & 1 == 1;

        let forward = &mut self.forward;
        let backward = &mut self.backward;
        forward.reserve(1);
        backward.reserve(1);
        forward[1] = 0;
        backward[1] = 0;

        for d in 0..max_d(a.len(), b.len()) as isize {
            forward.reserve(d as usize + 1);
            backward.reserve(d as usize + 1);
            let mut k = d;
            while k >= -d {
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let mut y = x - k;
                let (x0, y0) = (x, y);
                while x >= 0 && y >= 0 && x < n && y < m && a[x as usize] == b[y as usize] {
                    x += 1;
                    y += 1;
                }
                forward[k] = x;
                if odd && (k - delta).abs() < d && forward[k] + backward[delta - k] >= n {
                    return accept_split(x0, y0, n, m);
                }
                k -= 2;
            }

            let mut k = d;
            while k >= -d {
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };
                let mut y = x - k;
                while x >= 0
                    && y >= 0
                    && x < n
                    && y < m
                    && a[(n - x - 1) as usize] == b[(m - y - 1) as usize]
                {
                    x += 1;
                    y += 1;
                }
                backward[k] = x;
                if !odd && (k - delta).abs() <= d && backward[k] + forward[delta - k] >= n {
                    return accept_split(n - x, m - y, n, m);
                }
                k -= 2;
            }
        }

        None
    }
}

/// Accepts a split only when it lies inside the region and leaves two
/// strictly smaller halves.
fn accept_split(x: isize, y: isize, n: isize, m: isize) -> Option<(usize, usize)> {
    let inside = (0..=n).contains(&x) && (0..=m).contains(&y);
    let degenerate = (x == 0 && y == 0) || (x == n && y == m);
    if inside && !degenerate {
        Some((x as usize, y as usize))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumed(runs: &[Run], kind: RunKind) -> usize {
        runs.iter()
            .filter(|run| run.kind == kind)
            .map(|run| run.len)
            .sum()
    }

    fn replay(base: &[u8], target: &[u8], runs: &[Run]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut base_pos = 0;
        let mut target_pos = 0;
        for run in runs {
            assert_eq!(run.base, base_pos, "runs must be contiguous in base");
            assert_eq!(run.target, target_pos, "runs must be contiguous in target");
            match run.kind {
                RunKind::Equal => {
                    assert_eq!(
                        &base[run.base_range()],
                        &target[run.target_range()],
                        "equal run must cover equal bytes"
                    );
                    out.extend_from_slice(&base[run.base_range()]);
                }
                RunKind::Insert => out.extend_from_slice(&target[run.target_range()]),
                RunKind::Delete => {}
            }
            base_pos = run.base_range().end;
            target_pos = run.target_range().end;
        }
        assert_eq!(base_pos, base.len());
        assert_eq!(target_pos, target.len());
        out
    }

    #[test]
    fn identical_inputs_are_one_equal_run() {
        let runs = align(b"abcdef", b"abcdef");
        assert_eq!(runs, vec![Run::equal(0, 0, 6)]);
    }

    #[test]
    fn empty_inputs_produce_no_runs() {
        assert!(align(b"", b"").is_empty());
    }

    #[test]
    fn empty_base_is_one_insert() {
        assert_eq!(align(b"", b"xyz"), vec![Run::insert(0, 0, 3)]);
    }

    #[test]
    fn empty_target_is_one_delete() {
        assert_eq!(align(b"xyz", b""), vec![Run::delete(0, 0, 3)]);
    }

    #[test]
    fn single_substitution_costs_two() {
        let runs = align(b"a", b"b");
        assert_eq!(consumed(&runs, RunKind::Delete), 1);
        assert_eq!(consumed(&runs, RunKind::Insert), 1);
        assert_eq!(replay(b"a", b"b", &runs), b"b");
    }

    #[test]
    fn classic_paper_example_has_distance_five() {
        let (a, b) = (b"abcabba", b"cbabac");
        let runs = align(a, b);
        let cost = consumed(&runs, RunKind::Delete) + consumed(&runs, RunKind::Insert);
        assert_eq!(cost, 5);
        assert_eq!(replay(a, b, &runs), b);
    }

    #[test]
    fn interleaved_edits_replay() {
        let a = b"the quick brown fox jumps over the lazy dog";
        let b = b"the quack brown cat jumped over a lazy dog!";
        let runs = align(a, b);
        assert_eq!(replay(a, b, &runs), b);
    }

    #[test]
    fn adjacent_same_kind_runs_are_merged() {
        let runs = align(b"aXXXb", b"ab");
        assert_eq!(
            runs,
            vec![Run::equal(0, 0, 1), Run::delete(1, 1, 3), Run::equal(4, 1, 1)]
        );
    }

    #[test]
    fn frontier_growth_keeps_diagonals() {
        let mut frontier = Frontier::new();
        frontier.reserve(1);
        frontier[-1] = 7;
        frontier[1] = 9;
        frontier.reserve(5);
        assert_eq!((frontier[-1], frontier[1]), (7, 9));
        assert!(frontier.capacity() >= 11);
        frontier[-5] = 1;
        frontier[5] = 2;
    }

    #[test]
    fn frontiers_scale_with_edit_distance_not_input_length() {
        let base = vec![7u8; 1 << 20];
        let mut target = base.clone();
        target[1 << 19] = 8;

        let mut aligner = Aligner::new(&base, &target);
        aligner.conquer(0..base.len(), 0..target.len());

        assert_eq!(consumed(&aligner.runs, RunKind::Delete), 1);
        assert_eq!(consumed(&aligner.runs, RunKind::Insert), 1);
        assert!(aligner.forward.capacity() <= 16, "{}", aligner.forward.capacity());
        assert!(aligner.backward.capacity() <= 16, "{}", aligner.backward.capacity());
    }

    #[test]
    fn identical_inputs_allocate_no_frontier() {
        let data = vec![3u8; 1 << 20];
        let mut aligner = Aligner::new(&data, &data);
        aligner.conquer(0..data.len(), 0..data.len());
        assert_eq!(aligner.runs, vec![Run::equal(0, 0, data.len())]);
        assert_eq!(aligner.forward.capacity(), 0);
        assert_eq!(aligner.backward.capacity(), 0);
    }

    #[test]
    fn accept_split_rejects_corners_and_outside_points() {
        assert_eq!(accept_split(0, 0, 3, 3), None);
        assert_eq!(accept_split(3, 3, 3, 3), None);
        assert_eq!(accept_split(4, 1, 3, 3), None);
        assert_eq!(accept_split(1, -1, 3, 3), None);
        assert_eq!(accept_split(1, 2, 3, 3), Some((1, 2)));
    }
}
