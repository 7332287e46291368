/// Uniform random value from the browser's `Math.random`.
pub fn random_u32() -> u32 {
    (js_sys::Math::random() * (u32::MAX as f64 + 1.0)) as u32
}
