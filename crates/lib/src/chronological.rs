//! Newest-first ordering of posts by creation time.
//!
//! This is a quicksort with a uniformly random pivot and a single forward
//! partition pass. Posts with equal `created` timestamps end up in no
//! particular relative order; the sort is not stable. Average cost is
//! O(n log n), worst case O(n^2).

use std::{ops::Range, sync::Arc};

use rand::Rng;

use crate::post::Post;

pub fn sort<R: Rng>(posts: &mut [Arc<Post>], rng: &mut R) {
    sort_desc_by_key(posts, |post| post.created, rng);
}

/// Orders `items` so that keys are non-increasing. Pending sub-ranges are
/// kept as index ranges over the one backing slice.
pub fn sort_desc_by_key<T, K, F, R>(items: &mut [T], key: F, rng: &mut R)
where
    K: Ord,
    F: Fn(&T) -> K,
    R: Rng,
{
    let mut pending: Vec<Range<usize>> = vec![0..items.len()];

    while let Some(range) = pending.pop() {
        if range.len() < 2 {
            continue;
        }
        let pivot = partition(items, range.clone(), &key, rng);
        pending.push(range.start..pivot);
        pending.push(pivot + 1..range.end);
    }
}

/// Returns the pivot's final index. Everything before it has a strictly
/// greater key; everything after it does not.
fn partition<T, K, F, R>(items: &mut [T], range: Range<usize>, key: &F, rng: &mut R) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
    R: Rng,
{
    let last = range.end - 1;
    let pivot = rng.gen_range(range.clone());
    items.swap(pivot, last);

    let pivot_key = key(&items[last]);
    let mut left = range.start;
    for i in range.start..last {
        if key(&items[i]) > pivot_key {
            items.swap(left, i);
            left += 1;
        }
    }
    items.swap(left, last);
    left
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use chrono::{DateTime, FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::{sort, sort_desc_by_key};
    use crate::post::{canonical_path, Post};

    fn dt(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .unwrap()
    }

    fn post(title: &str, created: DateTime<FixedOffset>) -> Arc<Post> {
        Arc::new(Post {
            title: title.to_string(),
            subtitle: String::new(),
            author: String::new(),
            path: canonical_path(&created),
            created,
            edited: None,
            tags: vec![],
            content_preview: String::new(),
            content: String::new(),
        })
    }

    fn assert_descending(posts: &[Arc<Post>]) {
        for pair in posts.windows(2) {
            assert!(
                pair[0].created >= pair[1].created,
                "{} before {}",
                pair[0].created,
                pair[1].created
            );
        }
    }

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut posts: Vec<Arc<Post>> = vec![];
        sort(&mut posts, &mut rng);
        assert!(posts.is_empty());

        let mut posts = vec![post("only", dt(2020, 1, 1))];
        sort(&mut posts, &mut rng);
        assert_eq!("only", posts[0].title);
    }

    #[test]
    fn newest_first() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut posts = vec![
            post("b", dt(2019, 5, 1)),
            post("d", dt(2017, 1, 1)),
            post("a", dt(2021, 2, 3)),
            post("c", dt(2018, 12, 31)),
        ];
        sort(&mut posts, &mut rng);

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(vec!["a", "b", "c", "d"], titles);
    }

    #[test]
    fn shuffled_inputs_with_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..50 {
            let mut posts: Vec<Arc<Post>> = (0..40)
                .map(|i| post(&format!("{round}-{i}"), dt(2000 + (i % 13), 1 + (i as u32 % 12), 1)))
                .collect();
            posts.shuffle(&mut rng);
            sort(&mut posts, &mut rng);

            assert_eq!(40, posts.len());
            assert_descending(&posts);
        }
    }

    #[test]
    fn compares_instants_across_offsets() {
        let mut rng = StdRng::seed_from_u64(2);
        // 08:00 at +12:00 is 20:00 the previous day in UTC.
        let kiwi = FixedOffset::east_opt(12 * 3600)
            .unwrap()
            .with_ymd_and_hms(2018, 4, 15, 8, 0, 0)
            .unwrap();
        let mut posts = vec![post("kiwi", kiwi), post("utc", dt(2018, 4, 14) + chrono::Duration::hours(21))];
        sort(&mut posts, &mut rng);

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(vec!["utc", "kiwi"], titles);
    }

    #[test]
    fn already_sorted_and_reversed() {
        let mut rng = StdRng::seed_from_u64(3);

        let mut asc: Vec<u32> = (0..200).collect();
        sort_desc_by_key(&mut asc, |v| *v, &mut rng);
        assert_eq!((0..200).rev().collect::<Vec<_>>(), asc);

        let mut desc: Vec<u32> = (0..200).rev().collect();
        sort_desc_by_key(&mut desc, |v| *v, &mut rng);
        assert_eq!((0..200).rev().collect::<Vec<_>>(), desc);
    }

    #[test]
    fn all_equal_keys() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut values = vec![5u8; 64];
        sort_desc_by_key(&mut values, |v| *v, &mut rng);
        assert_eq!(vec![5u8; 64], values);
    }

    #[test]
    fn keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut values: Vec<i64> = (0..500).map(|i| (i * 7919) % 101).collect();
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        sort_desc_by_key(&mut values, |v| *v, &mut rng);
        assert_eq!(expected, values);
    }
}
