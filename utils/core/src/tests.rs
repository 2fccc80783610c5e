// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use super::{ByteReader, ByteWriter, DeserializationError, SliceReader};

// SLICE READER
// ================================================================================================

#[test]
fn read_u8() {
    let source = [1u8, 3, 5, 7];
    let mut a = SliceReader::new(&source);

    assert_eq!(1, a.read_u8().unwrap());
    assert_eq!(3, a.read_u8().unwrap());
    assert_eq!(5, a.read_u8().unwrap());
    assert_eq!(7, a.read_u8().unwrap());
    assert_eq!(DeserializationError::UnexpectedEOF, a.read_u8().unwrap_err());
}

#[test]
fn read_u16() {
    let mut source = 12345u16.to_le_bytes().to_vec();
    source.append(&mut 23456u16.to_le_bytes().to_vec());
    let mut a = SliceReader::new(&source);

    assert_eq!(12345, a.read_u16().unwrap());
    assert_eq!(23456, a.read_u16().unwrap());
    assert_eq!(DeserializationError::UnexpectedEOF, a.read_u16().unwrap_err());
}

#[test]
fn read_u64() {
    let mut source = 12345678u64.to_le_bytes().to_vec();
    source.append(&mut 23456789u64.to_le_bytes().to_vec());
    let mut a = SliceReader::new(&source);

    assert_eq!(12345678, a.read_u64().unwrap());
    assert_eq!(23456789, a.read_u64().unwrap());
    assert_eq!(DeserializationError::UnexpectedEOF, a.read_u64().unwrap_err());
}

#[test]
fn read_array_and_vec() {
    let source = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut a = SliceReader::new(&source);

    assert_eq!([1u8, 2, 3], a.read_array::<3>().unwrap());
    assert_eq!(vec![4u8, 5, 6], a.read_vec(3).unwrap());
    assert!(a.has_more_bytes());
    assert_eq!([7u8, 8], a.read_array::<2>().unwrap());
    assert!(!a.has_more_bytes());
    assert_eq!(DeserializationError::UnexpectedEOF, a.read_array::<1>().unwrap_err());
}

// BYTE WRITER
// ================================================================================================

#[test]
fn write_and_read_back() {
    let mut target: Vec<u8> = Vec::new();
    target.write_u8(0xab);
    target.write_u16(0x1234);
    target.write_u32(0xdeadbeef);
    target.write_u64(0x0123456789abcdef);
    target.write_bytes(&[9, 9, 9]);

    let mut reader = SliceReader::new(&target);
    assert_eq!(0xab, reader.read_u8().unwrap());
    assert_eq!(0x1234, reader.read_u16().unwrap());
    assert_eq!(0xdeadbeef, reader.read_u32().unwrap());
    assert_eq!(0x0123456789abcdef, reader.read_u64().unwrap());
    assert_eq!(vec![9u8, 9, 9], reader.read_vec(3).unwrap());
    assert!(!reader.has_more_bytes());
}
