use smallvec::SmallVec;

/// Conditioning set handed to the independence test.
pub type CondSet = SmallVec<[usize; 8]>;

/// Lexicographic `k`-combinations of a pool, yielded as pool elements.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    pool: &'a [usize],
    indices: SmallVec<[usize; 8]>,
    started: bool,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(pool: &'a [usize], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            done: k > pool.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = CondSet;

    fn next(&mut self) -> Option<CondSet> {
        if self.done {
            return None;
        }
        if self.started {
            let k = self.indices.len();
            let n = self.pool.len();
            // Rightmost index that can still move.
            let mut i = k;
            loop {
                if i == 0 {
                    self.done = true;
                    return None;
                }
                i -= 1;
                if self.indices[i] != i + n - k {
                    break;
                }
            }
            self.indices[i] += 1;
            for j in i + 1..k {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }
        self.started = true;
        Some(self.indices.iter().map(|&i| self.pool[i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(pool: &[usize], k: usize) -> Vec<Vec<usize>> {
        Combinations::new(pool, k).map(|c| c.to_vec()).collect()
    }

    #[test]
    fn test_two_of_four() {
        assert_eq!(
            all(&[1, 3, 5, 7], 2),
            vec![
                vec![1, 3],
                vec![1, 5],
                vec![1, 7],
                vec![3, 5],
                vec![3, 7],
                vec![5, 7]
            ]
        );
    }

    #[test]
    fn test_zero_size_yields_empty_set_once() {
        assert_eq!(all(&[4, 9], 0), vec![Vec::<usize>::new()]);
        assert_eq!(all(&[], 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_too_large_yields_nothing() {
        assert!(all(&[1, 2], 3).is_empty());
    }

    #[test]
    fn test_full_size_yields_pool() {
        assert_eq!(all(&[2, 6, 8], 3), vec![vec![2, 6, 8]]);
    }
}
