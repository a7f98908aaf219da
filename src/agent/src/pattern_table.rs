use std::collections::HashMap;

use common::model::game::Move;

pub const MAX_K: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCounts([u32; 3]);

impl MoveCounts {
    pub fn get(&self, value: &Move) -> u32 {
        self.0[value.index()]
    }

    pub fn increment(&mut self, value: &Move) {
        self.0[value.index()] += 1;
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// The most frequent move. Ties go to the earliest of `Move::ALL`.
    pub fn most_frequent(&self) -> Option<Move> {
        let mut best: Option<(Move, u32)> = None;
        for value in Move::ALL {
            let count = self.get(&value);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(value, _)| value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub lookback: usize,
    pub predicted: Move,
}

// Entries are only ever created alongside a positive count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternTable {
    entries: HashMap<Vec<Move>, MoveCounts>,
}

impl PatternTable {
    pub fn new() -> Self {
        PatternTable {
            entries: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counts(&self, subsequence: &[Move]) -> Option<&MoveCounts> {
        self.entries.get(subsequence)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Move], &MoveCounts)> {
        self.entries
            .iter()
            .map(|(subsequence, counts)| (subsequence.as_slice(), counts))
    }

    pub fn record(&mut self, subsequence: &[Move], next: &Move) {
        match self.entries.get_mut(subsequence) {
            Some(counts) => counts.increment(next),
            None => {
                let mut counts = MoveCounts::default();
                counts.increment(next);
                self.entries.insert(subsequence.to_vec(), counts);
            }
        }
    }

    pub fn observe(&mut self, history: &[Move], max_lookback: usize) {
        let len = history.len();
        if len < 2 {
            return;
        }
        let last = history[len - 1];
        for k in 1..=max_lookback.min(len - 1) {
            self.record(&history[len - 1 - k..len - 1], &last);
        }
    }

    pub fn predict(&self, history: &[Move], max_lookback: usize) -> Option<Prediction> {
        let len = history.len();
        for k in (1..=max_lookback.min(len)).rev() {
            let predicted = self
                .entries
                .get(&history[len - k..])
                .and_then(MoveCounts::most_frequent);
            if let Some(predicted) = predicted {
                return Some(Prediction {
                    lookback: k,
                    predicted,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::game::Move::{Paper, Rock, Scissors};

    #[test]
    fn most_frequent_breaks_ties_by_priority() {
        let mut counts = MoveCounts::default();
        assert_eq!(counts.most_frequent(), None);

        counts.increment(&Scissors);
        counts.increment(&Paper);
        assert_eq!(counts.most_frequent(), Some(Paper));

        counts.increment(&Rock);
        assert_eq!(counts.most_frequent(), Some(Rock));

        counts.increment(&Scissors);
        assert_eq!(counts.most_frequent(), Some(Scissors));
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn observe_records_every_completed_suffix() {
        let mut table = PatternTable::new();
        let history = [Rock, Paper, Scissors, Paper];
        table.observe(&history, MAX_K);

        assert_eq!(table.len(), 3);
        assert_eq!(table.counts(&[Scissors]).map(|c| c.get(&Paper)), Some(1));
        assert_eq!(table.counts(&[Paper, Scissors]).map(|c| c.get(&Paper)), Some(1));
        assert_eq!(
            table.counts(&[Rock, Paper, Scissors]).map(|c| c.get(&Paper)),
            Some(1)
        );
        assert!(table.counts(&[Rock, Paper, Scissors, Paper]).is_none());
    }

    #[test]
    fn observe_caps_lookback() {
        let mut table = PatternTable::new();
        let history = [Rock, Rock, Rock, Rock, Rock, Paper];
        table.observe(&history, MAX_K);
        assert_eq!(table.len(), MAX_K);
        assert!(table.counts(&[Rock; 5]).is_none());

        let mut short = PatternTable::new();
        short.observe(&history, 2);
        assert_eq!(short.len(), 2);
    }

    #[test]
    fn single_move_teaches_nothing() {
        let mut table = PatternTable::new();
        table.observe(&[Rock], MAX_K);
        assert!(table.is_empty());
        assert_eq!(table.predict(&[Rock], MAX_K), None);
    }

    #[test]
    fn longest_match_wins() {
        let mut table = PatternTable::new();
        for _ in 0..5 {
            table.record(&[Rock], &Scissors);
        }
        table.record(&[Paper, Paper, Rock], &Paper);

        let prediction = table.predict(&[Scissors, Paper, Paper, Rock], MAX_K);
        assert_eq!(
            prediction,
            Some(Prediction {
                lookback: 3,
                predicted: Paper,
            })
        );

        // Without the longer context the length-1 entry decides
        assert_eq!(
            table.predict(&[Scissors, Rock], MAX_K),
            Some(Prediction {
                lookback: 1,
                predicted: Scissors,
            })
        );
    }
}
