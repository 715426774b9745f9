/// FNV-1a 64-bit hasher used for stable bitmap identities.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    /// Hasher over a raster's dimensions and bytes.
    pub(crate) fn for_raster(width: u32, height: u32) -> Self {
        let mut h = Self(Self::OFFSET_BASIS);
        h.write_u32(width);
        h.write_u32(height);
        h
    }

    fn write_u32(&mut self, v: u32) {
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

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Map a percentage in `[0, 100]` onto an 8-bit weight in `[0, 255]`.
pub(crate) fn percent_to_u8(pct: u8) -> u16 {
    let pct = u32::from(pct.min(100));
    ((pct * 255 + 50) / 100) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
