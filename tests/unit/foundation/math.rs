use super::*;

fn raster_hash(width: u32, height: u32, data: &[u8]) -> u64 {
    let mut h = Fnv1a64::for_raster(width, height);
    h.write_bytes(data);
    h.finish()
}

#[test]
fn raster_hash_is_stable_across_chunking() {
    let mut split = Fnv1a64::for_raster(2, 1);
    split.write_bytes(b"skin");
    split.write_bytes(b"weave");
    assert_eq!(raster_hash(2, 1, b"skinweave"), split.finish());
}

#[test]
fn raster_hash_covers_dimensions() {
    let data = [7u8; 16];
    assert_ne!(raster_hash(4, 1, &data), raster_hash(2, 2, &data));
    assert_ne!(raster_hash(2, 2, &data), raster_hash(2, 2, &[8u8; 16]));
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn percent_endpoints_map_to_byte_endpoints() {
    assert_eq!(percent_to_u8(0), 0);
    assert_eq!(percent_to_u8(100), 255);
    assert_eq!(percent_to_u8(250), 255);
    assert_eq!(percent_to_u8(50), 128);
}
