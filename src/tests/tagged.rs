use crate::{
    CodecError, Marker, Raw, Serializer, Tagged, Varint, marker_len, skip_marker, unmarshal_marker,
    varint,
};

const COUNTER: Marker = 1;

#[test]
fn marker_accessor_needs_no_payload_serializer() {
    let tagged = Tagged::<u64, ()>::new(29, ());
    assert_eq!(tagged.marker(), 29);
}

#[test]
fn roundtrip() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let value = 11u64;

    let mut buf = [0u8; 16];
    let size = counter.size(&value);
    let n = counter.marshal(&value, &mut buf).unwrap();
    assert_eq!(n, size);

    let (decoded, read) = counter.unmarshal(&buf[..n]).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(read, n);

    assert_eq!(counter.skip(&buf[..n]).unwrap(), n);
}

// A marker above 127 takes more than one byte on the wire; size and byte
// counts must account for it.
#[test]
fn multi_byte_marker() {
    let wide: Marker = 300;
    let tagged = Tagged::<u64, _>::new(wide, Varint);
    assert_eq!(marker_len(wide), 2);

    let value = 5u64;
    let mut buf = [0u8; 16];
    let n = tagged.marshal(&value, &mut buf).unwrap();
    assert_eq!(n, marker_len(wide) + Varint.size(&value));
    assert_eq!(tagged.unmarshal(&buf[..n]).unwrap(), (value, n));
}

// Peeking at the marker and then decoding the data slice must agree,
// byte-count-wise, with the combined unmarshal.
#[test]
fn decomposed_path_matches_combined() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let value = 400u64;

    let mut buf = [0u8; 16];
    let total = counter.marshal(&value, &mut buf).unwrap();

    let (marker, n) = unmarshal_marker(&buf[..total]).unwrap();
    assert_eq!(marker, COUNTER);
    assert_eq!(n, marker_len(COUNTER));

    let (decoded, read) = counter.unmarshal_data(&buf[n..total]).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(n + read, total);

    let n = skip_marker(&buf[..total]).unwrap();
    assert_eq!(n + counter.skip_data(&buf[n..total]).unwrap(), total);
}

#[test]
fn marshal_writes_exactly_size_despite_spare_capacity() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let value = 77u64;

    let mut buf = [0xee; 32];
    let n = counter.marshal(&value, &mut buf).unwrap();
    assert_eq!(n, counter.size(&value));
    assert!(buf[n..].iter().all(|&b| b == 0xee));
}

#[test]
fn unmarshal_ignores_trailing_bytes() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let value = 9000u64;

    let mut buf = [0u8; 32];
    let n = counter.marshal(&value, &mut buf).unwrap();
    buf[n..].fill(0xee);

    // Full buffer, not just the value's slice.
    assert_eq!(counter.unmarshal(&buf).unwrap(), (value, n));
    assert_eq!(counter.skip(&buf).unwrap(), n);
}

// The buffer holds nothing but the foreign marker, so reaching the payload
// codec would fail with UnexpectedEof instead. Getting WrongMarker proves
// the payload was never touched.
#[test]
fn unmarshal_fails_fast_on_wrong_marker() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let actual = COUNTER + 3;

    let mut buf = [0u8; varint::MAX_LEN];
    let n = varint::marshal(actual, &mut buf).unwrap();
    assert_eq!(n, 1);

    let want = CodecError::WrongMarker {
        expected: COUNTER,
        actual,
    };
    assert_eq!(counter.unmarshal(&buf[..n]), Err(want));
    assert_eq!(counter.skip(&buf[..n]), Err(want));

    // The error tells the caller how far decoding got.
    assert_eq!(marker_len(actual), n);
}

#[test]
fn empty_input_propagates_marker_codec_error() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let want = unmarshal_marker(&[]).unwrap_err();
    assert_eq!(
        want,
        CodecError::UnexpectedEof {
            needed: 1,
            available: 0,
        }
    );

    assert_eq!(counter.unmarshal(&[]), Err(want));
    assert_eq!(counter.skip(&[]), Err(want));
    assert_eq!(skip_marker(&[]), Err(want));
}

#[test]
fn truncated_payload_propagates_payload_error() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let value = 300u64;

    let mut buf = [0u8; 16];
    let n = counter.marshal(&value, &mut buf).unwrap();

    // Cut the encoding one byte short of the payload's end.
    let cut = &buf[..n - 1];
    let unmarshal_err = counter.unmarshal(cut).unwrap_err();
    assert!(matches!(unmarshal_err, CodecError::UnexpectedEof { .. }));
    assert_eq!(counter.skip(cut), Err(unmarshal_err));
}

#[test]
fn marshal_rejects_short_buffer() {
    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    let value = 300u64;
    let size = counter.size(&value);

    let mut buf = [0u8; 16];
    let result = counter.marshal(&value, &mut buf[..size - 1]);
    assert!(matches!(result, Err(CodecError::BufferTooSmall { .. })));
}

// One payload codec instance, shared by reference across wrappers for two
// different tag values.
#[test]
fn payload_serializer_shared_by_reference() {
    let codec = Varint;
    let first = Tagged::<u64, _>::new(1, &codec);
    let second = Tagged::<u64, _>::new(2, &codec);

    let mut buf = [0u8; 16];
    let n = first.marshal(&10, &mut buf).unwrap();
    assert_eq!(first.unmarshal(&buf[..n]).unwrap(), (10, n));

    let n = second.marshal(&20, &mut buf).unwrap();
    assert_eq!(second.unmarshal(&buf[..n]).unwrap(), (20, n));

    // And the wrong wrapper still rejects the other's bytes.
    assert_eq!(
        first.unmarshal(&buf[..n]),
        Err(CodecError::WrongMarker {
            expected: 1,
            actual: 2,
        })
    );
}

#[test]
fn raw_payload_roundtrip() {
    #[derive(
        Debug,
        PartialEq,
        zerocopy::IntoBytes,
        zerocopy::FromBytes,
        zerocopy::Immutable,
        zerocopy::KnownLayout,
    )]
    #[repr(C)]
    struct Point {
        x: i32,
        y: i32,
    }

    let point = Tagged::<Point, _>::new(12, Raw);
    let value = Point { x: 10, y: -20 };

    let mut buf = [0u8; 16];
    let n = point.marshal(&value, &mut buf).unwrap();
    assert_eq!(n, marker_len(12) + size_of::<Point>());

    let (decoded, read) = point.unmarshal(&buf[..n]).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(read, n);
    assert_eq!(point.skip(&buf[..n]).unwrap(), n);
}

// Stateless wrappers are shareable across threads.
#[test]
fn tagged_is_sync_and_clonable() {
    fn assert_sync<V: Sync>(_v: &V) {}

    let counter = Tagged::<u64, _>::new(COUNTER, Varint);
    assert_sync(&counter);

    let copy = counter;
    assert_eq!(copy.marker(), counter.marker());
}
