use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use starcargo::{Cards, Error, KindsDb, DAMAGE, MISS, REACTOR, SHIELD, THRUSTER};

fn hash_of(cards: &Cards) -> u64 {
    let mut h = DefaultHasher::new();
    cards.hash(&mut h);
    h.finish()
}

#[test]
fn multiset_canonical_under_insertion_order() {
    let a = Cards::from_pairs(&[(REACTOR.id, 2), (DAMAGE.id, 1), (MISS.id, 3)]);
    let b = Cards::from_pairs(&[(MISS.id, 3), (REACTOR.id, 2), (DAMAGE.id, 1)]);
    let mut c = Cards::new();
    for _ in 0..3 {
        c.add_one(MISS.id);
    }
    c.add_one(DAMAGE.id);
    c.add(REACTOR.id, 2);

    assert_eq!(a, b, "insertion order must not affect equality");
    assert_eq!(a, c, "incremental adds must match bulk construction");
    assert_eq!(hash_of(&a), hash_of(&b), "hashes must be order-independent");
    assert_eq!(hash_of(&a), hash_of(&c));
}

#[test]
fn add_zero_is_a_noop() {
    let mut cards = Cards::new();
    cards.add(SHIELD.id, 0);
    assert!(cards.is_empty());
    assert_eq!(cards.size(), 0);
}

#[test]
fn size_counts_duplicates() {
    let cards = Cards::from_pairs(&[(REACTOR.id, 3), (THRUSTER.id, 2)]);
    assert_eq!(cards.size(), 5);
    assert_eq!(cards.count_of(REACTOR.id), 3);
    assert_eq!(cards.count_of(DAMAGE.id), 0);
}

#[test]
fn removal_deletes_entry_at_zero() {
    let mut cards = Cards::from_pairs(&[(REACTOR.id, 2)]);
    cards.remove_one(REACTOR.id).expect("first removal");
    assert_eq!(cards.count_of(REACTOR.id), 1);
    cards.remove_one(REACTOR.id).expect("second removal");
    assert!(cards.is_empty(), "entry must vanish at count zero");
}

#[test]
fn removal_failures_report_counts() {
    let mut cards = Cards::from_pairs(&[(DAMAGE.id, 1)]);

    let err = cards.remove_one(SHIELD.id).expect_err("kind not present");
    assert_eq!(
        err,
        Error::NotEnoughCards {
            wanted: 1,
            present: 0
        }
    );

    let err = cards.remove(DAMAGE.id, 2).expect_err("only one present");
    assert_eq!(
        err,
        Error::NotEnoughCards {
            wanted: 2,
            present: 1
        }
    );
    // the failed removal must not have consumed the card
    assert_eq!(cards.count_of(DAMAGE.id), 1);
}

#[test]
fn remove_all_clears_a_kind() {
    let mut cards = Cards::from_pairs(&[(MISS.id, 3), (DAMAGE.id, 1)]);
    cards.remove_all(MISS.id).expect("remove_all");
    assert_eq!(cards.count_of(MISS.id), 0);
    assert_eq!(cards.size(), 1);

    let err = cards.remove_all(MISS.id).expect_err("already gone");
    assert!(matches!(err, Error::NotEnoughCards { .. }));
}

#[test]
fn concatenation_sums_counts() {
    let a = Cards::from_pairs(&[(REACTOR.id, 1), (DAMAGE.id, 1)]);
    let b = Cards::from_pairs(&[(DAMAGE.id, 2), (MISS.id, 1)]);

    let sum = &a + &b;
    assert_eq!(sum.count_of(REACTOR.id), 1);
    assert_eq!(sum.count_of(DAMAGE.id), 3);
    assert_eq!(sum.count_of(MISS.id), 1);
    assert_eq!(sum.size(), a.size() + b.size());

    let mut acc = a.clone();
    acc += &b;
    assert_eq!(acc, sum);
}

#[test]
fn to_string_is_stable_per_kind_order() {
    let kinds = KindsDb::standard();
    let cards = Cards::from_pairs(&[(DAMAGE.id, 1), (REACTOR.id, 2)]);
    assert_eq!(cards.to_string(&kinds), "RRD");
    assert_eq!(Cards::new().to_string(&kinds), "");
}

#[test]
fn console_string_groups_by_sort_order_with_colors() {
    let kinds = KindsDb::standard();
    let cards = Cards::from_pairs(&[(DAMAGE.id, 1), (REACTOR.id, 2)]);
    assert_eq!(
        cards.to_console_string(&kinds),
        "\u{1b}[96mRR\u{1b}[33mD\u{1b}[0m"
    );
}

#[test]
fn console_string_for_empty_multiset() {
    let kinds = KindsDb::standard();
    assert_eq!(
        Cards::new().to_console_string(&kinds),
        "\u{1b}[90m<no cards>\u{1b}[0m"
    );
}
