use parented_bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.delete(v);
                set.remove(v);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.size() == set.len()
        && tree.in_order().eq(set.iter())
        && set.iter().all(|value| tree.contains(value))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let values: Vec<_> = tree.in_order().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn every_traversal_sees_every_value(xs: Vec<i8>) -> bool {
    fn sorted<'a>(iter: impl Iterator<Item = &'a i8>) -> Vec<i8> {
        let mut values: Vec<_> = iter.copied().collect();
        values.sort_unstable();
        values
    }

    let tree: Tree<_> = xs.into_iter().collect();
    let expected: Vec<_> = tree.in_order().copied().collect();

    expected.len() == tree.size()
        && sorted(tree.pre_order()) == expected
        && sorted(tree.post_order()) == expected
        && sorted(tree.breadth_first()) == expected
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logging();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present: BTreeSet<_> = xs
        .into_iter()
        .filter(|x| !deletes.contains(x))
        .collect();

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.size() == still_present.len()
}

#[quickcheck]
fn deleting_missing_value_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before: Vec<_> = tree.pre_order().copied().collect();
    let size = tree.size();

    tree.delete(&missing);
    tree.size() == size && tree.pre_order().copied().eq(before)
}

#[quickcheck]
fn depth_bounds_size(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    match tree.size() {
        0 => tree.depth() == 0 && tree.balance().is_none(),
        size => {
            let min_depth = (usize::BITS - size.leading_zeros()) as usize;
            (min_depth..=size).contains(&tree.depth())
                && tree.balance().map_or(false, |b| b.unsigned_abs() < tree.depth())
        }
    }
}
