use crate::hull::LadderCut;

/// Ladder cuts ordered by descending significance
///
/// Append-only. Equal significances keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct RankedHullSet {
    cuts: Vec<LadderCut>,
}

impl RankedHullSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a ladder cut after every cut of greater or equal significance
    ///
    /// Returns the rank the cut was placed at.
    pub fn insert(&mut self, cut: LadderCut) -> usize {
        let significance = cut.significance();
        let rank = self
            .cuts
            .partition_point(|c| c.significance() >= significance);
        self.cuts.insert(rank, cut);
        rank
    }

    /// Ladder cut at `rank` (0 = most significant), `None` past the end
    pub fn get(&self, rank: usize) -> Option<&LadderCut> {
        self.cuts.get(rank)
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LadderCut> {
        self.cuts.iter()
    }
}

impl<'a> IntoIterator for &'a RankedHullSet {
    type Item = &'a LadderCut;
    type IntoIter = std::slice::Iter<'a, LadderCut>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
