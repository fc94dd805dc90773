

use core::{f32, f64};

use super::*;

fn roundtrip<T: ToBytes + FromBytes>(value: &T) -> T {
    let mut buf = ByteBuffer::new();
    serialize(value, &mut buf);
    let decoded = deserialize::<T>(&mut buf).unwrap();
    assert!(buf.is_empty(), "{} bytes left over", buf.remaining_len());
    decoded
}

#[test]
fn test_u8() {
    let mut buf = ByteBuffer::new();
    42u8.to_bytes(&mut buf);
    assert_eq!(buf.remaining(), &[42]);

    assert_eq!(u8::from_bytes(&mut buf).unwrap(), 42);
    assert!(buf.is_empty());
}

#[test]
fn test_i32_host_native() {
    let mut buf = ByteBuffer::new();
    (-12345i32).to_bytes(&mut buf);
    assert_eq!(buf.remaining(), &(-12345i32).to_ne_bytes());

    assert_eq!(i32::from_bytes(&mut buf).unwrap(), -12345);
}

#[test]
fn test_u64() {
    assert_eq!(roundtrip(&0x1234_5678_9ABC_DEF0u64), 0x1234_5678_9ABC_DEF0);
}

#[test]
fn test_u128() {
    let value = 0x1234_5678_9ABC_DEF0_FEDC_BA98_7654_3210u128;
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_f32() {
    assert_eq!(roundtrip(&f32::consts::PI), f32::consts::PI);
}

#[test]
fn test_f64() {
    assert_eq!(roundtrip(&f64::consts::PI), f64::consts::PI);
}

#[test]
fn test_f64_nan_bits_preserved() {
    let value = f64::from_bits(0x7FF8_0000_0000_0ABC);
    assert_eq!(roundtrip(&value).to_bits(), value.to_bits());
}

#[test]
fn test_usize_is_pointer_width() {
    let mut buf = ByteBuffer::new();
    12345usize.to_bytes(&mut buf);
    assert_eq!(buf.remaining_len(), core::mem::size_of::<usize>());
    assert_eq!(usize::from_bytes(&mut buf).unwrap(), 12345);
}

#[test]
fn test_unit() {
    let mut buf = ByteBuffer::new();
    ().to_bytes(&mut buf);
    assert!(buf.is_empty());
    assert_eq!(<()>::from_bytes(&mut buf).unwrap(), ());
}

#[test]
fn test_array() {
    let value = [1u16, 2, 3, 4];
    let mut buf = ByteBuffer::new();
    value.to_bytes(&mut buf);
    assert_eq!(buf.remaining_len(), 8);
    assert_eq!(<[u16; 4]>::from_bytes(&mut buf).unwrap(), value);
}

#[test]
fn test_bool() {
    let mut buf = ByteBuffer::new();
    true.to_bytes(&mut buf);
    false.to_bytes(&mut buf);
    assert_eq!(buf.remaining(), &[1, 0]);

    assert!(bool::from_bytes(&mut buf).unwrap());
    assert!(!bool::from_bytes(&mut buf).unwrap());
}

#[test]
fn test_bool_nonzero_is_true() {
    let mut buf = ByteBuffer::from(&[2u8, 0xFF][..]);
    assert!(bool::from_bytes(&mut buf).unwrap());
    assert!(bool::from_bytes(&mut buf).unwrap());
}

#[test]
fn test_char() {
    assert_eq!(roundtrip(&'λ'), 'λ');
}

#[test]
fn test_char_invalid() {
    let mut buf = ByteBuffer::new();
    0xD800u32.to_bytes(&mut buf);
    assert!(matches!(
        char::from_bytes(&mut buf),
        Err(CodecError::InvalidData { .. })
    ));
}

#[test]
fn test_option() {
    assert_eq!(roundtrip(&Some(7u32)), Some(7));
    assert_eq!(roundtrip(&None::<u32>), None);

    let mut buf = ByteBuffer::new();
    Some(7u32).to_bytes(&mut buf);
    assert_eq!(buf.remaining_len(), 5);
}

#[test]
fn test_option_invalid_tag() {
    let mut buf = ByteBuffer::from(&[3u8][..]);
    assert!(matches!(
        Option::<u8>::from_bytes(&mut buf),
        Err(CodecError::InvalidData { .. })
    ));
}

#[test]
fn test_tuple() {
    let value = (1u8, alloc::string::String::from("two"), 3.0f64);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_box() {
    let value = alloc::boxed::Box::new(99i64);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_unexpected_eof() {
    let mut buf = ByteBuffer::from(&[0u8; 2][..]);
    assert_eq!(
        u32::from_bytes(&mut buf),
        Err(CodecError::TruncatedInput {
            needed: 4,
            available: 2
        })
    );
}

#[test]
fn test_categories() {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    assert_eq!(u32::CATEGORY, Category::FixedLayout);
    assert_eq!(f64::CATEGORY, Category::FixedLayout);
    assert_eq!(bool::CATEGORY, Category::FixedLayout);
    assert_eq!(<[u8; 4]>::CATEGORY, Category::FixedLayout);
    assert_eq!(String::CATEGORY, Category::Text);
    assert_eq!(<&str>::CATEGORY, Category::Text);
    assert_eq!(Vec::<String>::CATEGORY, Category::Sequence);
    assert_eq!(<[i32]>::CATEGORY, Category::Sequence);
    assert_eq!(BTreeMap::<String, i32>::CATEGORY, Category::Associative);
    assert_eq!(Option::<u8>::CATEGORY, Category::Custom);
    assert_eq!(<(u8, u8)>::CATEGORY, Category::Custom);
}

#[test]
fn test_byte_len() {
    assert_eq!(42u32.byte_len(), Some(4));
    assert_eq!(true.byte_len(), Some(1));
    assert_eq!("abc".byte_len(), Some(LEN_PREFIX + 3));
    assert_eq!((1u8, 2u16).byte_len(), Some(3));
}

#[test]
fn test_to_vec_and_from_slice() {
    let bytes = to_vec(&0xABCDu16);
    assert_eq!(bytes, 0xABCDu16.to_ne_bytes());
    assert_eq!(from_slice::<u16>(&bytes).unwrap(), 0xABCD);
}

#[test]
fn test_from_slice_rejects_trailing_bytes() {
    let bytes = [0u8; 5];
    assert_eq!(
        from_slice::<u32>(&bytes),
        Err(CodecError::TrailingBytes { remaining: 1 })
    );
}
