use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `count` distinct entries uniformly without replacement, in draw order.
///
/// `count` larger than the pool is clamped to the pool size.
pub fn select_random<R>(pool: &[String], count: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let count = count.min(pool.len());
    pool.choose_multiple(rng, count).cloned().collect()
}
