#![no_main]

use libfuzzer_sys::fuzz_target;

use daifuku_parse::prelude::*;

fuzz_target!(|data: &[u8]| {
    // Drive every decoding family over arbitrary bytes. Nothing here may
    // panic; faults are the only acceptable failure mode, and the cursor
    // invariants must hold after every call.
    let _ = data.with_cursor(|cursor| {
        let _ = cursor.atomically(|c| c.read_be::<u64>());
        let _ = cursor.atomically(|c| c.read_sized::<i32>(Endian::Little, 7));
        let _ = cursor.atomically(|c| c.read_converted::<u16, i8>(Endian::Big));
        let _ = cursor.atomically(|c| c.read_utf8_nul());
        let _ = cursor.atomically(|c| c.read_utf16_remaining());
        let _ = cursor.atomically(|c| c.read_range_counted(|c| c.read_be::<u32>()));

        check_invariants(cursor);

        // Exhaustive pass over whatever is left.
        let _ = cursor.read_seq_exhaustive(|c| c.read_sized::<i64>(Endian::Big, 3));
        check_invariants(cursor);
        Ok(())
    });

    // Self-describing pass: first byte picks a count, rest is payload.
    let _ = data.with_cursor(|cursor| {
        let count: u8 = cursor.read_be()?;
        let values = cursor.read_seq(count, |c| c.read_le::<u16>())?;
        assert!(values.len() == count as usize);
        check_invariants(cursor);
        Ok(())
    });
});

fn check_invariants(cursor: &Cursor<'_>) {
    assert!(cursor.start_offset() <= cursor.end_offset());
    assert!(cursor.end_offset() <= cursor.region_len());
    assert_eq!(cursor.remaining(), cursor.end_offset() - cursor.start_offset());
}
