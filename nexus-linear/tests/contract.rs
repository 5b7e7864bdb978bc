//! Shared container contract, run against every `Sequence` implementation.

use nexus_linear::{Error, LinkedList, Sequence, Vector};

fn contents<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let mut out = Vec::with_capacity(seq.len());
    let mut cursor = seq.cursor_front();
    while !cursor.is_end() {
        out.push(cursor.get().unwrap().clone());
        cursor.move_next().unwrap();
    }
    out
}

fn filled<S: Sequence<Item = u64> + Default>(items: &[u64]) -> S {
    let mut seq = S::default();
    for &item in items {
        seq.append(item);
    }
    seq
}

// =============================================================================
// Contract
// =============================================================================

fn size_tracks_insertions_and_removals<S: Sequence<Item = u64> + Default>() {
    let mut seq = S::default();
    assert!(seq.is_empty());

    seq.append(1);
    seq.prepend(0);
    seq.insert(seq.end(), 2).unwrap();
    assert_eq!(seq.len(), 3);

    seq.pop_first().unwrap();
    assert_eq!(seq.len(), 2);
    assert!(seq.pop_last().is_ok());
    assert_eq!(seq.len(), 1);
    assert!(!seq.is_empty());
}

fn append_then_prepend_order<S: Sequence<Item = u64> + Default>() {
    let mut appended = S::default();
    let mut prepended = S::default();
    for i in 1..=5 {
        appended.append(i);
        prepended.prepend(i);
    }
    assert_eq!(contents(&appended), vec![1, 2, 3, 4, 5]);
    assert_eq!(contents(&prepended), vec![5, 4, 3, 2, 1]);
}

fn pop_first_after_single_append<S: Sequence<Item = u64> + Default>() {
    let mut seq = S::default();
    seq.append(42);
    assert_eq!(seq.pop_first(), Ok(42));
    assert!(seq.is_empty());
}

fn erase_only_element_empties<S: Sequence<Item = u64> + Default>() {
    let mut seq: S = filled(&[7]);
    assert_eq!(seq.erase(seq.begin()), Ok(7));
    assert!(seq.is_empty());
    assert_eq!(seq.pop_last(), Err(Error::EmptyContainer));
    assert_eq!(seq.pop_first(), Err(Error::EmptyContainer));
    assert_eq!(seq.erase(seq.begin()), Err(Error::EmptyContainer));
}

fn erase_end_is_invalid<S: Sequence<Item = u64> + Default>() {
    let mut seq: S = filled(&[1, 2]);
    assert_eq!(seq.erase(seq.end()), Err(Error::InvalidPosition));
    assert_eq!(contents(&seq), vec![1, 2]);
}

fn erase_all_range<S: Sequence<Item = u64> + Default>() {
    for n in [0usize, 1, 2, 15] {
        let items: Vec<u64> = (0..n as u64).collect();
        let mut seq: S = filled(&items);
        seq.erase_range(seq.begin(), seq.end()).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }
}

fn erase_partial_range<S: Sequence<Item = u64> + Default>() {
    let mut seq: S = filled(&[0, 1, 2, 3, 4]);
    let first = seq.offset(seq.begin(), 1).unwrap();
    let last = seq.offset(seq.begin(), 3).unwrap();
    seq.erase_range(first, last).unwrap();
    assert_eq!(contents(&seq), vec![0, 3, 4]);
}

fn deref_end_out_of_range<S: Sequence<Item = u64> + Default>() {
    for n in [0usize, 1, 3, 12] {
        let items: Vec<u64> = (0..n as u64).collect();
        let seq: S = filled(&items);
        assert_eq!(seq.get(seq.end()), Err(Error::OutOfRange));
        assert_eq!(seq.cursor_end().get(), Err(Error::OutOfRange));
    }
}

fn navigation_limits<S: Sequence<Item = u64> + Default>() {
    let seq: S = filled(&[1, 2, 3]);
    assert_eq!(seq.next_position(seq.end()), Err(Error::OutOfRange));
    assert_eq!(seq.prev_position(seq.begin()), Err(Error::OutOfRange));
    assert_eq!(seq.offset(seq.begin(), 4), Err(Error::OutOfRange));
    assert_eq!(seq.offset(seq.end(), -4), Err(Error::OutOfRange));
    assert_eq!(seq.offset(seq.begin(), 3), Ok(seq.end()));
    assert_eq!(seq.offset(seq.end(), -3), Ok(seq.begin()));

    let last = seq.prev_position(seq.end()).unwrap();
    assert_eq!(seq.get(last), Ok(&3));
}

fn cursor_walks_both_ways<S: Sequence<Item = u64> + Default>() {
    let seq: S = filled(&[1, 2, 3]);

    let mut cursor = seq.cursor_front();
    assert_eq!(cursor.move_prev(), Err(Error::OutOfRange));
    assert_eq!(cursor.get(), Ok(&1));

    let third = cursor.forward(2).unwrap();
    assert_eq!(third.get(), Ok(&3));
    assert_eq!(third.backward(2).unwrap(), cursor);
    assert!(cursor.forward(4).is_err());

    let mut back = seq.cursor_end();
    let mut seen = Vec::new();
    while back.move_prev().is_ok() {
        seen.push(*back.get().unwrap());
    }
    assert_eq!(seen, vec![3, 2, 1]);
    assert_eq!(back, seq.cursor_front());
}

fn cursor_equality_is_positional<S: Sequence<Item = u64> + Default>() {
    let seq: S = filled(&[5, 5]);
    let first = seq.cursor_front();
    let second = first.forward(1).unwrap();
    assert_ne!(first, second);
    assert_eq!(first.get(), second.get());
    assert_eq!(seq.cursor(seq.begin()), first);
}

fn cursor_mut_edits<S: Sequence<Item = u64> + Default>() {
    let mut seq: S = filled(&[1, 3, 4]);
    {
        let mut cursor = seq.cursor_mut(seq.begin());
        cursor.move_next().unwrap();
        cursor.insert_before(2).unwrap();
        assert_eq!(cursor.get(), Ok(&3));

        *cursor.get_mut().unwrap() = 30;
        assert_eq!(cursor.remove_current(), Ok(30));
        assert_eq!(cursor.get(), Ok(&4));
        assert_eq!(cursor.remove_current(), Ok(4));
        assert!(cursor.is_end());
        assert_eq!(cursor.remove_current(), Err(Error::InvalidPosition));
        assert_eq!(cursor.get_mut(), Err(Error::OutOfRange));

        cursor.seek(-1).unwrap();
        assert_eq!(cursor.as_cursor().get(), Ok(&2));
        assert_eq!(cursor.seek(-5), Err(Error::OutOfRange));
        assert_eq!(cursor.get(), Ok(&2));
    }
    assert_eq!(contents(&seq), vec![1, 2]);
}

fn insert_positions<S: Sequence<Item = u64> + Default>() {
    let mut seq = S::default();
    let end = seq.end();
    let first = seq.insert(end, 2).unwrap();
    assert_eq!(seq.get(first), Ok(&2));

    seq.insert(seq.begin(), 0).unwrap();
    let before_two = seq.offset(seq.begin(), 1).unwrap();
    seq.insert(before_two, 1).unwrap();
    seq.insert(seq.end(), 3).unwrap();
    assert_eq!(contents(&seq), vec![0, 1, 2, 3]);
}

fn many_elements_survive_growth<S: Sequence<Item = u64> + Default>() {
    let mut seq = S::default();
    for i in 0..200 {
        if i % 2 == 0 {
            seq.append(i);
        } else {
            seq.prepend(i);
        }
    }
    let items = contents(&seq);
    let odd: Vec<u64> = (0..200).filter(|i| i % 2 == 1).rev().collect();
    let even: Vec<u64> = (0..200).filter(|i| i % 2 == 0).collect();
    assert_eq!(items, [odd, even].concat());
}

macro_rules! contract_suite {
    ($($module:ident => $container:ty),* $(,)?) => {
        $(
            mod $module {
                use super::*;

                #[test]
                fn size_tracks_insertions_and_removals() {
                    super::size_tracks_insertions_and_removals::<$container>();
                }

                #[test]
                fn append_then_prepend_order() {
                    super::append_then_prepend_order::<$container>();
                }

                #[test]
                fn pop_first_after_single_append() {
                    super::pop_first_after_single_append::<$container>();
                }

                #[test]
                fn erase_only_element_empties() {
                    super::erase_only_element_empties::<$container>();
                }

                #[test]
                fn erase_end_is_invalid() {
                    super::erase_end_is_invalid::<$container>();
                }

                #[test]
                fn erase_all_range() {
                    super::erase_all_range::<$container>();
                }

                #[test]
                fn erase_partial_range() {
                    super::erase_partial_range::<$container>();
                }

                #[test]
                fn deref_end_out_of_range() {
                    super::deref_end_out_of_range::<$container>();
                }

                #[test]
                fn navigation_limits() {
                    super::navigation_limits::<$container>();
                }

                #[test]
                fn cursor_walks_both_ways() {
                    super::cursor_walks_both_ways::<$container>();
                }

                #[test]
                fn cursor_equality_is_positional() {
                    super::cursor_equality_is_positional::<$container>();
                }

                #[test]
                fn cursor_mut_edits() {
                    super::cursor_mut_edits::<$container>();
                }

                #[test]
                fn insert_positions() {
                    super::insert_positions::<$container>();
                }

                #[test]
                fn many_elements_survive_growth() {
                    super::many_elements_survive_growth::<$container>();
                }
            }
        )*
    };
}

contract_suite!(
    linked_list => LinkedList<u64>,
    linked_list_u16 => LinkedList<u64, u16>,
    vector => Vector<u64>,
);

// =============================================================================
// Container-specific behavior
// =============================================================================

#[test]
fn list_scenario() {
    let mut list: LinkedList<&str> = LinkedList::new();
    list.append("a");
    list.append("b");
    list.prepend("c");
    assert_eq!(contents(&list), vec!["c", "a", "b"]);
    assert_eq!(list.len(), 3);

    list.erase(list.begin()).unwrap();
    assert_eq!(contents(&list), vec!["a", "b"]);

    assert_eq!(list.pop_last(), Ok("b"));
    assert_eq!(contents(&list), vec!["a"]);
}

#[test]
fn list_positions_survive_unrelated_edits() {
    let mut list: LinkedList<u64> = LinkedList::new();
    let pinned = list.append(10);
    for i in 0..50 {
        list.prepend(i);
        list.append(i);
    }
    let begin = list.begin();
    list.erase(begin).unwrap();
    list.pop_last().unwrap();
    assert_eq!(list.get(pinned), Ok(&10));
}

#[test]
fn vector_prepend_scenario() {
    let mut vec: Vector<&str> = Vector::new();
    assert_eq!(vec.capacity(), 10);
    for _ in 0..11 {
        vec.prepend("x");
    }
    assert_eq!(vec.len(), 11);
    assert!(vec.capacity() > 10);
    assert_eq!(contents(&vec), vec!["x"; 11]);
}

#[test]
fn vector_append_past_initial_capacity() {
    let mut vec: Vector<u64> = Vector::new();
    for i in 0..11 {
        vec.append(i);
    }
    assert_eq!(contents(&vec), (0..11).collect::<Vec<_>>());
    assert_eq!(vec.capacity(), 22);
}

#[test]
fn vector_offset_is_bounds_checked() {
    let vec: Vector<u64> = (0..5).collect();
    let cursor = vec.cursor_front();
    assert_eq!(cursor.forward(5).unwrap().position(), 5);
    assert_eq!(cursor.forward(6), Err(Error::OutOfRange));
    assert_eq!(cursor.forward(usize::MAX), Err(Error::OutOfRange));
    assert_eq!(vec.cursor_end().backward(5).unwrap(), cursor);
}
