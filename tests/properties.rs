//! Properties of the magic attack tables checked against ray casting.
//!
//! Run with: cargo test --release --test properties

use magic_bits::bitboard::parse_layout;
use magic_bits::magic::EMPTY_SLOT;
use magic_bits::{bishop_attacks, queen_attacks, rook_attacks, Attacks, BuildConfig, Slider, SliderTable};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RANDOM_SAMPLES: usize = 20_000;

#[test]
fn every_relevant_occupancy_matches_ray_casting() {
    for sq in 0..64u8 {
        for occupancy in Slider::ROOK.occupancies(sq) {
            assert_eq!(
                rook_attacks(occupancy, sq),
                Slider::ROOK.attack(sq, occupancy),
                "rook sq={} occ={:#x}",
                sq,
                occupancy
            );
        }
        for occupancy in Slider::BISHOP.occupancies(sq) {
            assert_eq!(
                bishop_attacks(occupancy, sq),
                Slider::BISHOP.attack(sq, occupancy),
                "bishop sq={} occ={:#x}",
                sq,
                occupancy
            );
        }
    }
}

#[test]
fn random_full_board_occupancies_match_ray_casting() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..RANDOM_SAMPLES {
        let occupied: u64 = rng.gen::<u64>() & rng.gen::<u64>();
        let sq = rng.gen_range(0..64u8);
        assert_eq!(rook_attacks(occupied, sq), Slider::ROOK.attack(sq, occupied));
        assert_eq!(bishop_attacks(occupied, sq), Slider::BISHOP.attack(sq, occupied));
    }
}

#[test]
fn bits_outside_the_mask_are_ignored() {
    let attacks = Attacks::new();
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..RANDOM_SAMPLES {
        let sq = rng.gen_range(0..64u8);
        let rook_mask = attacks.rook_table().magics()[sq as usize].mask;
        let bishop_mask = attacks.bishop_table().magics()[sq as usize].mask;

        let base: u64 = rng.gen();
        let noise: u64 = rng.gen();
        let rook_other = (base & rook_mask) | (noise & !rook_mask);
        let bishop_other = (base & bishop_mask) | (noise & !bishop_mask);

        assert_eq!(attacks.rook(base, sq), attacks.rook(rook_other, sq));
        assert_eq!(attacks.bishop(base, sq), attacks.bishop(bishop_other, sq));
    }
}

#[test]
fn queen_is_rook_union_bishop() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..RANDOM_SAMPLES {
        let occupied: u64 = rng.gen();
        let sq = rng.gen_range(0..64u8);
        assert_eq!(
            queen_attacks(occupied, sq),
            rook_attacks(occupied, sq) | bishop_attacks(occupied, sq)
        );
    }
}

#[test]
fn no_table_slot_holds_the_empty_sentinel_for_a_real_occupancy() {
    let attacks = Attacks::new();
    for (slider, table) in [
        (Slider::ROOK, attacks.rook_table()),
        (Slider::BISHOP, attacks.bishop_table()),
    ] {
        table.verify(&slider).unwrap();
        for sq in 0..64u8 {
            for occupancy in slider.occupancies(sq) {
                assert_ne!(table.lookup(occupancy, sq), EMPTY_SLOT);
            }
        }
    }
}

#[test]
fn construction_is_deterministic() {
    let a = Attacks::new();
    let b = Attacks::new();
    assert_eq!(a, b);

    let occupied = 0x0042_1800_2400_8100;
    for sq in 0..64u8 {
        assert_eq!(a.queen(occupied, sq), b.queen(occupied, sq));
    }
}

#[test]
fn regenerated_magics_replay_identically_as_constants() {
    let (searched, report) =
        SliderTable::build_with_report(&Slider::BISHOP, &BuildConfig::regenerate(Some(2024))).unwrap();
    assert!(report.attempts.iter().all(|&a| a >= 1));

    let replayed_slider = Slider::BISHOP.with_magics(searched.magic_numbers());
    let replayed = SliderTable::build(&replayed_slider, &BuildConfig::default()).unwrap();
    assert_eq!(replayed, searched);

    let builtin = Attacks::new();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..RANDOM_SAMPLES {
        let occupied: u64 = rng.gen();
        let sq = rng.gen_range(0..64u8);
        assert_eq!(replayed.lookup(occupied, sq), builtin.bishop(occupied, sq));
    }
}

#[test]
fn queen_reference_positions() {
    let occupied = 0xF7F6F3748CA5B610;
    assert_eq!(queen_attacks(occupied, 36), 0x0004_382c_3850_9000);
    assert_eq!(queen_attacks(occupied, 29), 0x0000_0070_d870_8804);
}

#[test]
fn layout_reference_positions() {
    let occupied = parse_layout(
        "1.11..1. .1...1.1 1....11. ........ ....1... ...1.1.1 111..11. 1....11.",
    )
    .unwrap();
    let bishop = parse_layout(
        "...1...1 ....1.1. ........ ....1.1. ...1...1 ..1..... .1...... ........",
    )
    .unwrap();
    let rook = parse_layout(
        "..1.111. ...1.... ...1.... ...1.... ...1.... ...1.... ........ ........",
    )
    .unwrap();

    assert_eq!(bishop_attacks(occupied, 45), bishop);
    assert_eq!(rook_attacks(occupied, 59), rook);
}
