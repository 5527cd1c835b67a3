use crate::NUMBERS;
use crate::Number;

/// Observed numbers ranked by how often they won, most frequent first.
///
/// Ties keep first-seen order, so the ranking is a pure function of the
/// history and never depends on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frequency(Vec<(Number, usize)>);

impl From<&[Number]> for Frequency {
    fn from(history: &[Number]) -> Self {
        let mut counts = [0usize; NUMBERS];
        let mut seen = Vec::new();
        for &n in history {
            if counts[n as usize] == 0 {
                seen.push(n);
            }
            counts[n as usize] += 1;
        }
        let mut ranking = seen
            .into_iter()
            .map(|n| (n, counts[n as usize]))
            .collect::<Vec<(Number, usize)>>();
        ranking.sort_by(|a, b| b.1.cmp(&a.1));
        Self(ranking)
    }
}

impl Frequency {
    /// Number of distinct numbers observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The `k` most frequent numbers, most frequent first.
    pub fn hot(&self, k: usize) -> Vec<Number> {
        self.0.iter().take(k).map(|(n, _)| *n).collect()
    }
    /// The `k` least frequent numbers, least frequent first, read from the
    /// tail of the same ranking. Only observed numbers qualify, so asking for
    /// at least `len()` numbers returns every observed number.
    pub fn cold(&self, k: usize) -> Vec<Number> {
        self.0.iter().rev().take(k).map(|(n, _)| *n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_count_then_first_seen() {
        let history: &[Number] = &[7, 3, 7, 9, 3, 1, 7];
        let freq = Frequency::from(history);
        assert_eq!(freq.len(), 4);
        assert_eq!(freq.hot(4), vec![7, 3, 9, 1]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let history: &[Number] = &[5, 4, 3, 2];
        let freq = Frequency::from(history);
        assert_eq!(freq.hot(2), vec![5, 4]);
        assert_eq!(freq.cold(2), vec![2, 3]);
    }

    #[test]
    fn cold_reads_from_the_tail() {
        let history: &[Number] = &[1, 1, 1, 2, 2, 3];
        let freq = Frequency::from(history);
        assert_eq!(freq.cold(1), vec![3]);
        assert_eq!(freq.cold(2), vec![3, 2]);
    }

    #[test]
    fn oversized_requests_return_every_observed_number() {
        let history: &[Number] = &[8, 8, 6];
        let freq = Frequency::from(history);
        assert_eq!(freq.hot(50), vec![8, 6]);
        assert_eq!(freq.cold(2), vec![6, 8]);
        assert_eq!(freq.cold(50), vec![6, 8]);
    }

    #[test]
    fn empty_history() {
        let freq = Frequency::from(&[] as &[Number]);
        assert!(freq.is_empty());
        assert!(freq.hot(5).is_empty());
        assert!(freq.cold(5).is_empty());
    }
}
