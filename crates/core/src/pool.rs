//! SAT variable pool: a bijection from symbolic descriptors to positive
//! integer variable identifiers, allocated lazily on first mention.
//!
//! Generalizes `dbcop_sat`'s `OrderVars` (a `HashMap<(V, V), u32>` behind
//! a single `before(a, b)` descriptor shape) to the three descriptor
//! shapes of the minor encoding, plus a `fresh` escape hatch for the
//! cardinality-encoding auxiliaries of §10.2.

use hashbrown::HashMap;

/// A symbolic SAT variable descriptor.
///
/// Distinct variants never collide: `Assign`, `Order`, and `Contact` are
/// different enum discriminants before their tuples are ever compared, so
/// `A(v, i)` and `P(v, o, i)` can never alias even if their integer
/// fields happen to match.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// `A(v, i)`: vertex `v` is assigned to branch set `i`.
    Assign { v: usize, i: usize },
    /// `P(v, o, i)`: vertex `v` occupies BFS order `o` in branch set `i`.
    Order { v: usize, o: usize, i: usize },
    /// `C(u, v, i, j)`: edge `{u, v}` witnesses contact between branch
    /// sets `i` and `j`, with `u ∈ i` and `v ∈ j`.
    Contact {
        u: usize,
        v: usize,
        i: usize,
        j: usize,
    },
}

/// Lazily allocates fresh positive SAT variable ids for descriptors.
#[derive(Debug, Default)]
pub struct VarPool {
    ids: HashMap<Descriptor, u32>,
    next_var: u32,
}

impl VarPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variable id for `descriptor`, allocating one on first
    /// use. Idempotent: repeated calls with the same descriptor return
    /// the same id.
    pub fn id(&mut self, descriptor: Descriptor) -> u32 {
        *self.ids.entry(descriptor).or_insert_with(|| {
            let id = self.next_var;
            self.next_var += 1;
            id
        })
    }

    /// Allocates a brand-new variable id with no associated descriptor.
    /// Used for cardinality-encoding auxiliaries, which have no symbolic
    /// meaning beyond "fresh".
    pub fn fresh(&mut self) -> u32 {
        let id = self.next_var;
        self.next_var += 1;
        id
    }

    /// Total number of variables allocated so far (descriptors + fresh).
    #[must_use]
    pub fn num_vars(&self) -> u32 {
        self.next_var
    }

    /// Looks up the id already allocated for `descriptor`, without
    /// allocating one if it is missing. Used by read-only model decoding,
    /// where every descriptor of interest is guaranteed to have been
    /// allocated during encoding.
    #[must_use]
    pub fn get(&self, descriptor: Descriptor) -> Option<u32> {
        self.ids.get(&descriptor).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_idempotent() {
        let mut pool = VarPool::new();
        let d = Descriptor::Assign { v: 3, i: 1 };
        let first = pool.id(d);
        let second = pool.id(d);
        assert_eq!(first, second);
    }

    #[test]
    fn id_is_injective_across_distinct_descriptors() {
        let mut pool = VarPool::new();
        let a = pool.id(Descriptor::Assign { v: 0, i: 0 });
        let b = pool.id(Descriptor::Assign { v: 0, i: 1 });
        let c = pool.id(Descriptor::Order { v: 0, o: 0, i: 0 });
        let d = pool.id(Descriptor::Contact {
            u: 0,
            v: 0,
            i: 0,
            j: 0,
        });
        let ids = [a, b, c, d];
        for (idx, x) in ids.iter().enumerate() {
            for (jdx, y) in ids.iter().enumerate() {
                if idx != jdx {
                    assert_ne!(x, y, "descriptors at {idx} and {jdx} collided");
                }
            }
        }
    }

    #[test]
    fn distinct_shapes_never_collide_even_with_matching_fields() {
        // A(0, 0) vs P(0, 0, 0) vs C(0, 0, 0, 0): same integers, different tags.
        let mut pool = VarPool::new();
        let a = pool.id(Descriptor::Assign { v: 0, i: 0 });
        let p = pool.id(Descriptor::Order { v: 0, o: 0, i: 0 });
        let c = pool.id(Descriptor::Contact {
            u: 0,
            v: 0,
            i: 0,
            j: 0,
        });
        assert_ne!(a, p);
        assert_ne!(p, c);
        assert_ne!(a, c);
    }

    #[test]
    fn fresh_never_aliases_a_descriptor_id() {
        let mut pool = VarPool::new();
        let a = pool.id(Descriptor::Assign { v: 0, i: 0 });
        let f = pool.fresh();
        let b = pool.id(Descriptor::Assign { v: 0, i: 1 });
        assert_ne!(a, f);
        assert_ne!(f, b);
        assert_eq!(pool.num_vars(), 3);
    }
}
