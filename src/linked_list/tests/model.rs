//! Randomized operation sequences checked against a `Vec` of the same handles.

extern crate std;

use std::vec::Vec;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::list::SList;

const POOL: usize = 32;
const STEPS: usize = 2_000;

fn assert_same(list: &SList<&u32>, model: &[&u32]) {
    assert_eq!(list.size(), model.len());
    for (got, want) in list.iter().zip(model) {
        assert!(core::ptr::eq(*got, *want));
    }
}

#[test]
fn test_random_operations_match_vec() {
    let pool: Vec<u32> = (0..POOL as u32).map(|i| i % 8).collect();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list: SList<&u32> = SList::new();
    let mut model: Vec<&u32> = Vec::new();

    for _ in 0..STEPS {
        let item = &pool[rng.random_range(0..POOL)];
        match rng.random_range(0..8) {
            0 => {
                list.append(item).unwrap();
                model.push(item);
            }
            1 => {
                list.prepend(item).unwrap();
                model.insert(0, item);
            }
            2 => {
                let position = rng.random_range(0..model.len() + 3);
                list.insert_index(item, position).unwrap();
                model.insert(position.min(model.len()), item);
            }
            3 => {
                let index = rng.random_range(0..model.len() + 3);
                let removed = list.remove_by_index(index);
                if index < model.len() {
                    assert!(core::ptr::eq(removed.unwrap(), model.remove(index)));
                } else {
                    assert!(removed.is_none());
                }
            }
            4 => {
                let removed = list.remove_by_data(&item);
                match model.iter().position(|h| core::ptr::eq(*h, item)) {
                    Some(index) => {
                        model.remove(index);
                        assert!(core::ptr::eq(removed.unwrap(), item));
                    }
                    None => assert!(removed.is_none()),
                }
            }
            5 => {
                let position = model.iter().position(|h| **h > *item).unwrap_or(model.len());
                list.insert(item, |new, existing| *new < *existing).unwrap();
                model.insert(position, item);
            }
            6 => {
                list.sort(|a, b| a < b);
                model.sort_by_key(|h| **h);
                assert!(list.is_sorted_by(|a, b| a < b));
            }
            _ => {
                let expected = model.iter().position(|h| core::ptr::eq(*h, item));
                assert_eq!(list.index(&item), expected);
            }
        }
        assert_same(&list, &model);
    }

    let tail: SList<&u32> = pool.iter().take(4).collect();
    list.concat(tail);
    model.extend(pool.iter().take(4));
    assert_same(&list, &model);
}
