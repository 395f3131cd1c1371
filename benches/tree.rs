extern crate rbint;

use std::collections::BTreeSet;

use criterion::{Criterion, criterion_group, criterion_main};

fn insert(c: &mut Criterion) {
    c.bench_function("rbint_insert", |b| {
        b.iter(|| {
            let mut tree = rbint::RBTree::new();
            for k in 0..1000 {
                tree.insert(k);
            }
            tree
        })
    });
    c.bench_function("rbtree_insert", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<i32, ()>::new();
            for k in 0..1000 {
                tree.insert(k, ());
            }
            tree
        })
    });
    c.bench_function("btreeset_insert", |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for k in 0..1000 {
                set.insert(k);
            }
            set
        })
    });
}

fn contains(c: &mut Criterion) {
    let tree: rbint::RBTree = (0..1000).collect();
    c.bench_function("rbint_contains", |b| {
        b.iter(|| (0..2000).filter(|&k| tree.contains(k)).count())
    });
    let mut other = rbtree::RBTree::<i32, ()>::new();
    for k in 0..1000 {
        other.insert(k, ());
    }
    c.bench_function("rbtree_contains", |b| {
        b.iter(|| (0..2000).filter(|k| other.contains_key(k)).count())
    });
    let set: BTreeSet<i32> = (0..1000).collect();
    c.bench_function("btreeset_contains", |b| {
        b.iter(|| (0..2000).filter(|k| set.contains(k)).count())
    });
}

criterion_group!(benches, insert, contains);
criterion_main!(benches);
