//! Exhaustive bounded change search.
//!
//! Works for any number of denominations in any value order. Among all ways
//! to pay `target` from the pool, it returns the one that uses the most coins
//! of the highest denomination, then the next highest, and so on. For a pool
//! of a unit coin plus one higher coin this is exactly what a greedy
//! dispenser must produce, so the model can check both feasibility and the
//! resulting pool.

/// Pick coin counts worth exactly `target`.
///
/// `pool` holds `(unit_value, available)` pairs. The returned vector is
/// parallel to `pool`. Returns `None` when no combination exists.
pub fn bounded_change(target: u64, pool: &[(u64, u32)]) -> Option<Vec<u32>> {
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| pool[b].0.cmp(&pool[a].0));

    let mut chosen = vec![0; pool.len()];
    search(target, pool, &order, &mut chosen).then_some(chosen)
}

fn search(remaining: u64, pool: &[(u64, u32)], order: &[usize], chosen: &mut [u32]) -> bool {
    let Some((&index, rest)) = order.split_first() else {
        return remaining == 0;
    };

    let (value, available) = pool[index];
    let most = if value == 0 { 0 } else { (remaining / value).min(u64::from(available)) };

    for count in (0..=most).rev() {
        chosen[index] = u32::try_from(count).unwrap_or(u32::MAX);
        if search(remaining - count * value, pool, rest, chosen) {
            return true;
        }
    }
    chosen[index] = 0;
    false
}
