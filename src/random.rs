use rand::Rng;

/// Source of uniformly distributed bounded integers.
pub trait RandomSource {
    /// Draw a value uniformly from `[0, bound]`, both ends inclusive.
    fn next_bounded(&mut self, bound: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_bounded(&mut self, bound: u32) -> u32 {
        self.gen_range(0..=bound)
    }
}
