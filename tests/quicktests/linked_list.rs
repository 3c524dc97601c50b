use parented_bst::linked_list::LinkedList;
use parented_bst::Error;
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn behaves_like_vec(ops: Vec<Op<u8>>) -> bool {
    let mut list = LinkedList::new();
    let mut model = Vec::new();

    for op in ops {
        match op {
            Op::Insert(v) => {
                list.insert(v);
                model.push(v);
            }
            Op::Remove(v) => {
                let expected = model
                    .iter()
                    .position(|x| *x == v)
                    .map(|i| model.remove(i))
                    .ok_or(Error::NotFound);
                if list.remove(&v) != expected {
                    return false;
                }
            }
        }
    }

    list.size() == model.len() && list.iter().eq(model.iter())
}

#[quickcheck]
fn display_joins_values(xs: Vec<u16>) -> bool {
    let list: LinkedList<_> = xs.iter().copied().collect();
    let joined: Vec<_> = xs.iter().map(ToString::to_string).collect();

    list.display() == format!("({})", joined.join(", "))
}

#[quickcheck]
fn pop_drains_in_insertion_order(xs: Vec<i32>) -> bool {
    let mut list = LinkedList::new();
    for x in &xs {
        list.insert(*x);
    }

    let mut popped = Vec::new();
    while let Some(node) = list.pop() {
        popped.push(node.into_data());
    }
    popped == xs && list.is_empty()
}
