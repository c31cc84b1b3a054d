use crate::core::rng::SeededRandom;

/// Fisher-Yates shuffle driven by `rng`, walking the cursor from the end of
/// the slice down to zero. Consumes exactly `items.len()` draws.
pub fn shuffle<T>(items: &mut [T], rng: &mut SeededRandom) {
    let mut cursor = items.len();
    while cursor != 0 {
        let random_index = rng.next_index(cursor);
        cursor -= 1;
        items.swap(cursor, random_index);
    }
}

/// Owned variant of [`shuffle`]; returns the same container.
pub fn shuffled<T>(mut items: Vec<T>, rng: &mut SeededRandom) -> Vec<T> {
    shuffle(&mut items, rng);
    items
}

/// Shuffle with a generator freshly seeded from `year`. Repeated calls with
/// the same year and input order give the same permutation.
pub fn shuffle_for_year<T>(items: &mut [T], year: u32) {
    let mut rng = SeededRandom::from_year(year);
    shuffle(items, &mut rng);
}

/// Position of the first element equal to `value`.
pub fn find_index<T, Q>(value: &Q, sequence: &[T]) -> Option<usize>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    sequence.iter().position(|item| item == value)
}
