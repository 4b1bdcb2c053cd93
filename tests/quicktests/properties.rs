use ordered_tree::{Order, OrderedTree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map of value counts.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                *counts.entry(v.clone()).or_default() += 1;
            }
            Op::Remove(v) => {
                if tree.remove(v).is_some() {
                    let count = counts.get_mut(v).expect("removed a value that was never inserted");
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(v);
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected: Vec<&i8> = counts
        .iter()
        .flat_map(|(v, count)| std::iter::repeat(v).take(*count))
        .collect();

    tree.inorder() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for remove in &removes {
        // We may have inserted the same value multiple times - remove each one.
        while tree.remove(remove).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn inorder_is_non_decreasing(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);

    tree.traverse(Order::Inorder)
        .windows(2)
        .all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn display_has_a_line_per_order(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::from_values(xs.iter().copied());
    let display = tree.display();
    let lines: Vec<&str> = display.lines().collect();

    display.ends_with('\n')
        && lines.len() == 3
        && Order::ALL.iter().zip(&lines).all(|(order, line)| {
            let mut words = line.split(' ');
            words.next() == Some(order.label()) && words.count() == xs.len()
        })
}
