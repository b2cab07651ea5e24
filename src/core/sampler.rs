use rand::Rng;
use rand::seq::index;

/// Draw `amount` distinct elements of `items` in random order.
///
/// `amount` is capped at `items.len()`; callers check their minimum beforehand.
pub(crate) fn sample_without_replacement<'a, T, R>(
    rng: &mut R,
    items: &'a [T],
    amount: usize,
) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    index::sample(rng, items.len(), amount.min(items.len()))
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn sample_is_distinct_subset() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let items: Vec<u32> = (0..10).collect();
        for amount in 0..=items.len() {
            let picked = sample_without_replacement(&mut rng, &items, amount);
            assert_eq!(picked.len(), amount);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), amount);
        }
    }

    #[test]
    fn full_sample_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let items = ["a", "b", "c"];
        let mut picked = sample_without_replacement(&mut rng, &items, 3);
        picked.sort();
        assert_eq!(picked, vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn oversized_request_is_capped() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut picked = sample_without_replacement(&mut rng, &[1, 2], 3);
        picked.sort();
        assert_eq!(picked, vec![&1, &2]);
        assert!(sample_without_replacement::<u8, _>(&mut rng, &[], 1).is_empty());
    }

    #[test]
    fn same_seed_same_sample() {
        let items: Vec<u32> = (0..50).collect();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            sample_without_replacement(&mut a, &items, 5),
            sample_without_replacement(&mut b, &items, 5)
        );
    }
}
