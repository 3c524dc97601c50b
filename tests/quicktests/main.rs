use quickcheck::{Arbitrary, Gen};
use simplelog::{Config, LevelFilter, TestLogger};

mod linked_list;
mod tree;

/// An operation applied to both a structure under test and a model of it.
#[derive(Clone, Debug)]
pub enum Op<T> {
    Insert(T),
    Remove(T),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}
