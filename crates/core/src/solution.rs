//! The decoded vertex → branch-set assignment.

use hashbrown::HashSet;

/// `branch[v] == i` means vertex `v` is assigned to branch set `i`;
/// `branch[v] == -1` means `v` is assigned to no branch set (§9's open
/// question: F5 is `AtMostOne`, not `ExactlyOne`, so unassigned vertices
/// are expected, not an error).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    branch: Vec<i64>,
}

/// Sentinel branch index for "assigned to no branch set".
pub const UNASSIGNED: i64 = -1;

impl Solution {
    #[must_use]
    pub fn new(branch: Vec<i64>) -> Self {
        Self { branch }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.branch
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.branch.len()
    }

    #[must_use]
    pub fn branch_of(&self, v: usize) -> i64 {
        self.branch[v]
    }

    /// The vertex set `B_i = { v : branch[v] == i }` for branch `i`.
    #[must_use]
    pub fn branch_set(&self, i: usize) -> HashSet<usize> {
        let i = i64::try_from(i).expect("branch index fits in i64");
        self.branch
            .iter()
            .enumerate()
            .filter_map(|(v, &b)| (b == i).then_some(v))
            .collect()
    }
}

impl From<Vec<i64>> for Solution {
    fn from(branch: Vec<i64>) -> Self {
        Self::new(branch)
    }
}
