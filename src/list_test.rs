// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

use super::*;

#[test]
fn new_list_starts_empty() {
    let mut heap = ListHeap::new();
    let h = heap.new_list();
    assert_eq!(heap.len(h).unwrap(), 0);
}

#[test]
fn from_data_round_trips_elements() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[10, 20, 30]);
    assert_eq!(heap.len(h).unwrap(), 3);
    assert_eq!(heap.get(h, 0).unwrap(), 10);
    assert_eq!(heap.get(h, 1).unwrap(), 20);
    assert_eq!(heap.get(h, 2).unwrap(), 30);
}

#[test]
fn get_out_of_range_is_fatal() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2]);
    assert_eq!(heap.get(h, 2), Err(ListError::IndexOutOfRange { index: 2, size: 2 }));
    assert_eq!(heap.get(h, -1), Err(ListError::IndexOutOfRange { index: -1, size: 2 }));
}

#[test]
fn set_replaces_element() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3]);
    heap.set(h, 1, 99).unwrap();
    assert_eq!(heap.get(h, 1).unwrap(), 99);
}

#[test]
fn push_then_len_is_previous_length_plus_one() {
    let mut heap = ListHeap::new();
    let h = heap.new_list();
    heap.push(h, 10).unwrap();
    heap.push(h, 20).unwrap();
    assert_eq!(heap.len(h).unwrap(), 2);
    assert_eq!(heap.get(h, 0).unwrap(), 10);
    assert_eq!(heap.get(h, 1).unwrap(), 20);
}

#[test]
fn clear_resets_size_to_zero() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3]);
    heap.clear(h).unwrap();
    assert_eq!(heap.len(h).unwrap(), 0);
}

#[test]
fn slice_sentinel_minus_one_minus_one_is_an_independent_full_copy() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3, 4]);
    let s = heap.slice(h, -1, -1).unwrap();
    assert_eq!(heap.len(s).unwrap(), 4);
    heap.set(s, 0, 99).unwrap();
    assert_eq!(heap.get(h, 0).unwrap(), 1);
}

#[test]
fn slice_copies_requested_subrange() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3, 4]);
    let s = heap.slice(h, 1, 3).unwrap();
    assert_eq!(heap.len(s).unwrap(), 2);
    assert_eq!(heap.get(s, 0).unwrap(), 2);
    assert_eq!(heap.get(s, 1).unwrap(), 3);
}

#[test]
fn slice_mutation_does_not_affect_original() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3, 4]);
    let s = heap.slice(h, 1, 3).unwrap();
    heap.set(s, 0, 100).unwrap();
    assert_eq!(heap.get(h, 1).unwrap(), 2);
}

#[test]
fn slice_negative_non_sentinel_bound_is_fatal() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3]);
    assert_eq!(heap.slice(h, -2, 2), Err(ListError::InvalidSliceBound { bound: -2 }));
}

#[test]
fn slice_bound_exceeding_size_is_fatal() {
    let mut heap = ListHeap::new();
    let h = heap.from_data(&[1, 2, 3]);
    assert_eq!(heap.slice(h, 0, 4), Err(ListError::SliceOutOfRange { bound: 4, size: 3 }));
}

#[test]
fn ref_then_unref_to_zero_invalidates_handle() {
    let mut heap = ListHeap::new();
    let h = heap.new_list();
    heap.incref(h).unwrap();
    heap.decref(h).unwrap();
    assert_eq!(heap.len(h), Err(ListError::InvalidHandle(h)));
}

#[test]
fn unref_without_prior_ref_stays_alive() {
    let mut heap = ListHeap::new();
    let h = heap.new_list();
    heap.decref(h).unwrap();
    assert_eq!(heap.len(h).unwrap(), 0);
}

#[test]
fn operations_on_invalid_handle_are_fatal() {
    let mut heap = ListHeap::new();
    assert_eq!(heap.len(42), Err(ListError::InvalidHandle(42)));
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn push_sequence_len_matches_count(values: Vec<i64>) {
            let mut heap = ListHeap::new();
            let h = heap.new_list();
            for v in &values {
                heap.push(h, *v).unwrap();
            }
            prop_assert_eq!(heap.len(h).unwrap(), values.len() as i64);
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(heap.get(h, i as i64).unwrap(), *v);
            }
        }

        #[test]
        fn full_slice_equals_original_element_wise(values: Vec<i64>) {
            let mut heap = ListHeap::new();
            let h = heap.from_data(&values);
            let s = heap.slice(h, -1, -1).unwrap();
            prop_assert_eq!(heap.len(s).unwrap(), heap.len(h).unwrap());
            for i in 0..values.len() as i64 {
                prop_assert_eq!(heap.get(s, i).unwrap(), heap.get(h, i).unwrap());
            }
        }
    }
}
