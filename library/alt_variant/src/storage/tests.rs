use super::*;
use pretty_assertions::assert_eq;

type Set = (u8, u64, [u16; 5]);

#[test]
fn empty_storage_has_zero_discriminant() {
    let storage = Storage::<Set>::empty();
    assert_eq!(storage.active(), None);
    assert_eq!(storage.discriminant(), 0);
}

#[test]
fn region_fits_every_alternative() {
    assert!(std::mem::size_of::<<Set as AltSet>::Layout>() >= 10);
    assert_eq!(
        std::mem::align_of::<<Set as AltSet>::Layout>(),
        std::mem::align_of::<u64>()
    );
}

#[test]
fn region_pointer_is_aligned_for_the_strictest_alternative() {
    let storage = Storage::<Set>::empty();
    assert_eq!(storage.raw() as usize % std::mem::align_of::<u64>(), 0);
}

#[test]
fn write_then_read_round_trips() {
    let mut storage = Storage::<Set>::empty();
    let position = Position::nth(2);
    // SAFETY: storage is empty and `[u16; 5]` is the third alternative.
    unsafe { storage.write(position, [1_u16, 2, 3, 4, 5]) };
    assert_eq!(storage.discriminant(), 3);
    // SAFETY: the discriminant names `[u16; 5]`.
    let live = unsafe { storage.as_alt::<[u16; 5]>() };
    assert_eq!(live, &[1, 2, 3, 4, 5]);
    // SAFETY: as above.
    let out = unsafe { storage.read::<[u16; 5]>() };
    assert_eq!(out, [1, 2, 3, 4, 5]);
    assert_eq!(storage.active(), None);
}

#[test]
fn mutable_view_updates_in_place() {
    let mut storage = Storage::<Set>::empty();
    // SAFETY: storage is empty and `u64` is the second alternative.
    unsafe { storage.write(Position::nth(1), 7_u64) };
    // SAFETY: the discriminant names `u64`.
    unsafe { *storage.as_alt_mut::<u64>() += 1 };
    // SAFETY: as above.
    assert_eq!(unsafe { *storage.as_alt::<u64>() }, 8);
}

#[test]
fn marking_tracks_the_discriminant() {
    let mut storage = Storage::<Set>::empty();
    storage.mark_live(Position::nth(0));
    assert_eq!(storage.discriminant(), 1);
    storage.mark_empty();
    assert_eq!(storage.discriminant(), 0);
}
