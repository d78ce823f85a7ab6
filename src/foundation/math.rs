#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Small deterministic value-noise source built on the seeded FNV hash.
///
/// Used for the per-frame camouflage speckle and hair texture so that tests
/// can pin a seed and get byte-identical frames.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SpeckleRng {
    state: u64,
}

impl SpeckleRng {
    pub(crate) fn new(seed: u64) -> Self {
        let mut h = Fnv1a64::new(seed ^ Fnv1a64::OFFSET_BASIS);
        h.write_u64(seed);
        Self { state: h.finish() }
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let mut h = Fnv1a64::new(self.state);
        h.write_u64(self.state);
        self.state = h.finish();
        (self.state >> 16) as u32
    }

    /// Uniform sample in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform sample in `[lo, hi)`.
    pub(crate) fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    pub(crate) fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let i = (self.next_u32() as usize) % items.len().max(1);
        &items[i.min(items.len() - 1)]
    }
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let af = f64::from(a);
    let bf = f64::from(b);
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}
