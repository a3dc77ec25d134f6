/// Seed drawn from JavaScript's `Math.random`, two 32-bit halves.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;

    let half = || (random() * f64::from(u32::MAX)) as u64;
    (half() << 32) | half()
}
