// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fixed-width little-endian encode/decode helpers for the block codec.
//!
//! The wire format (see `crate::codec`) has no varints and no padding, so
//! this module only needs the fixed-width primitives, unlike a general
//! purpose coding module that would also carry varint support.

#[inline]
pub fn put_fixed_u32(dst: &mut Vec<u8>, v: u32) {
    dst.extend_from_slice(&v.to_le_bytes());
}

#[inline]
pub fn put_fixed_u16(dst: &mut Vec<u8>, v: u16) {
    dst.extend_from_slice(&v.to_le_bytes());
}

#[inline]
pub fn decode_fixed_u32(src: &[u8]) -> u32 {
    u32::from_le_bytes([src[0], src[1], src[2], src[3]])
}

#[inline]
pub fn decode_fixed_u16(src: &[u8]) -> u16 {
    u16::from_le_bytes([src[0], src[1]])
}

#[cfg(test)]
mod test_coding {
    use super::*;

    #[test]
    fn test_u32_round_trip() {
        let mut buf = Vec::new();
        put_fixed_u32(&mut buf, 0xdead_beef);
        assert_eq!(buf, vec![0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(decode_fixed_u32(&buf), 0xdead_beef);
    }

    #[test]
    fn test_u16_round_trip() {
        let mut buf = Vec::new();
        put_fixed_u16(&mut buf, 0xbeef);
        assert_eq!(buf, vec![0xef, 0xbe]);
        assert_eq!(decode_fixed_u16(&buf), 0xbeef);
    }
}
