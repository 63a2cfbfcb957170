//! Tests for short-name allocation: sequence shape, namespace
//! independence, determinism, and reset behavior.

use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use squish_css::{NameAllocator, Namespace};

#[test]
fn test_sequence_runs_a_through_z_then_aa() {
    let mut allocator = NameAllocator::new();
    let first: Vec<String> = (0..28).map(|_| allocator.next(Namespace::Class)).collect();

    assert_eq!(first[0], "a");
    assert_eq!(first[1], "b");
    assert_eq!(first[25], "z");
    assert_eq!(first[26], "aa");
    assert_eq!(first[27], "ab");
}

#[test]
fn test_namespaces_are_independent() {
    let mut allocator = NameAllocator::new();

    // Both namespaces start the sequence from the top.
    assert_eq!(allocator.next(Namespace::Class), "a");
    assert_eq!(allocator.next(Namespace::Id), "a");
    assert_eq!(allocator.next(Namespace::Class), "b");
    assert_eq!(allocator.next(Namespace::Id), "b");

    assert_eq!(allocator.allocated(Namespace::Class), 2);
    assert_eq!(allocator.allocated(Namespace::Id), 2);
}

#[test]
fn test_reset_restarts_both_sequences() {
    let mut allocator = NameAllocator::new();
    let _ = allocator.next(Namespace::Class);
    let _ = allocator.next(Namespace::Class);
    let _ = allocator.next(Namespace::Id);

    allocator.reset();

    assert_eq!(allocator.next(Namespace::Class), "a");
    assert_eq!(allocator.next(Namespace::Id), "a");
    assert_eq!(allocator.allocated(Namespace::Class), 1);
}

#[test]
fn test_namespace_display_is_lowercase() {
    assert_eq!(Namespace::Class.to_string(), "class");
    assert_eq!(Namespace::Id.to_string(), "id");
}

/// No two allocations in one namespace ever collide.
#[quickcheck]
fn prop_tokens_are_unique_within_a_namespace(count: u8) -> bool {
    let mut allocator = NameAllocator::new();
    let tokens: Vec<String> = (0..count).map(|_| allocator.next(Namespace::Id)).collect();
    let distinct: HashSet<&String> = tokens.iter().collect();
    distinct.len() == tokens.len()
}

/// The n-th allocation is fully determined by n: two fresh allocators
/// produce identical sequences.
#[quickcheck]
fn prop_fresh_allocators_agree(count: u8) -> bool {
    let mut left = NameAllocator::new();
    let mut right = NameAllocator::new();
    (0..count).all(|_| left.next(Namespace::Class) == right.next(Namespace::Class))
}

/// Every token is non-empty lowercase ASCII letters — valid in any
/// position of a CSS identifier.
#[quickcheck]
fn prop_tokens_are_lowercase_alpha(count: u8) -> bool {
    let mut allocator = NameAllocator::new();
    (0..count).all(|_| {
        let token = allocator.next(Namespace::Class);
        !token.is_empty() && token.chars().all(|c| c.is_ascii_lowercase())
    })
}
