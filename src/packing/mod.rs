use nalgebra::{Vector2, Vector3, Vector4};

use crate::packing::float16::{f16_to_f32, f32_to_f16};

pub mod float16;

pub fn pack_unorm8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

pub fn unpack_unorm8(v: u8) -> f32 {
    v as f32 / 255.0
}

pub fn pack_unorm16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0 + 0.5) as u16
}

pub fn unpack_unorm16(v: u16) -> f32 {
    v as f32 / 65535.0
}

pub fn pack_snorm8(v: f32) -> i8 {
    (v.clamp(-1.0, 1.0) * 127.0).round() as i8
}

/// The two's complement minimum (-128) also decodes to -1.0, so both
/// encodings of full negative stay in range.
pub fn unpack_snorm8(v: i8) -> f32 {
    (v as f32 / 127.0).max(-1.0)
}

pub fn pack_snorm16(v: f32) -> i16 {
    (v.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

pub fn unpack_snorm16(v: i16) -> f32 {
    (v as f32 / 32767.0).max(-1.0)
}

pub fn pack_unorm4x8(v: Vector4<f32>) -> u32 {
    pack_unorm8(v.x) as u32
        | (pack_unorm8(v.y) as u32) << 8
        | (pack_unorm8(v.z) as u32) << 16
        | (pack_unorm8(v.w) as u32) << 24
}

pub fn unpack_unorm4x8(v: u32) -> Vector4<f32> {
    Vector4::new(
        unpack_unorm8(v as u8),
        unpack_unorm8((v >> 8) as u8),
        unpack_unorm8((v >> 16) as u8),
        unpack_unorm8((v >> 24) as u8),
    )
}

pub fn pack_unorm2x16(v: Vector2<f32>) -> u32 {
    pack_unorm16(v.x) as u32 | (pack_unorm16(v.y) as u32) << 16
}

pub fn unpack_unorm2x16(v: u32) -> Vector2<f32> {
    Vector2::new(unpack_unorm16(v as u16), unpack_unorm16((v >> 16) as u16))
}

/// Packs an HDR color into the R11G11B10 float format: R in bits 0..=10,
/// G in 11..=21, B in 22..=31. Each channel is an unsigned small float with
/// the half-precision exponent range, so the conversion goes through half
/// and truncates the excess mantissa bits. Negative inputs and NaN clamp
/// to zero; values above the half range encode as channel infinity.
pub fn pack_r11g11b10(v: Vector3<f32>) -> u32 {
    let r = (f32_to_f16(v.x.max(0.0)) >> 4) as u32 & 0x7ff;
    let g = (f32_to_f16(v.y.max(0.0)) >> 4) as u32 & 0x7ff;
    let b = (f32_to_f16(v.z.max(0.0)) >> 5) as u32 & 0x3ff;

    r | (g << 11) | (b << 22)
}

pub fn unpack_r11g11b10(v: u32) -> Vector3<f32> {
    Vector3::new(
        f16_to_f32(((v & 0x7ff) << 4) as u16),
        f16_to_f32((((v >> 11) & 0x7ff) << 4) as u16),
        f16_to_f32((((v >> 22) & 0x3ff) << 5) as u16),
    )
}

pub fn merge_u64(lo: u32, hi: u32) -> u64 {
    (hi as u64) << 32 | lo as u64
}

pub fn split_u64(v: u64) -> (u32, u32) {
    (v as u32, (v >> 32) as u32)
}
