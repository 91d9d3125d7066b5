use battleship_batch::{Board, GuessResult, PlacementFault, ShipKind, BOARD_SIZE, FLEET};
use proptest::prelude::*;

const N: i64 = BOARD_SIZE as i64;

const STANDARD: [&str; 5] = [
    "A 0 0 0 4",
    "B 2 0 5 0",
    "S 2 2 2 4",
    "D 7 7 9 7",
    "P 9 0 9 1",
];

fn standard_board() -> Board {
    let mut board = Board::new();
    for line in STANDARD {
        board.place_ship(line).unwrap();
    }
    board
}

/// A straight segment of the right length for `kind`, endpoints in either order.
fn segment(kind: ShipKind) -> impl Strategy<Value = (i64, i64, i64, i64)> {
    let len = kind.size() as i64;
    (0..N, 0..N - len + 1, any::<bool>(), any::<bool>()).prop_map(
        move |(fixed, start, vertical, reversed)| {
            let end = start + len - 1;
            let (a, b) = if reversed { (end, start) } else { (start, end) };
            if vertical {
                (fixed, a, fixed, b)
            } else {
                (a, fixed, b, fixed)
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn valid_segment_renders_kind(
        (kind, (x1, y1, x2, y2)) in (0..FLEET.len())
            .prop_flat_map(|idx| (Just(FLEET[idx]), segment(FLEET[idx])))
    ) {
        let mut board = Board::new();
        let line = format!("{} {} {} {} {}", kind, x1, y1, x2, y2);
        prop_assert!(board.place_ship(&line).is_ok());

        let rows: Vec<Vec<char>> = board
            .render()
            .lines()
            .map(|row| row.split(' ').map(|g| g.chars().next().unwrap()).collect())
            .collect();
        let mut covered = 0;
        for y in 0..N {
            for x in 0..N {
                let on_segment = x >= x1.min(x2) && x <= x1.max(x2) && y >= y1.min(y2) && y <= y1.max(y2);
                let glyph = rows[(N - 1 - y) as usize][x as usize];
                if on_segment {
                    covered += 1;
                    prop_assert_eq!(glyph, kind.letter());
                } else {
                    prop_assert_eq!(glyph, '.');
                }
            }
        }
        prop_assert_eq!(covered, kind.size());
    }

    #[test]
    fn wrong_length_is_rejected(x in 0..N, y in 0..N, len in 1..=N, vertical in any::<bool>()) {
        prop_assume!(len != 2);
        let (x2, y2) = if vertical { (x, y + len - 1) } else { (x + len - 1, y) };
        prop_assume!(x2 < N && y2 < N);
        let mut board = Board::new();
        let err = board.place_ship(&format!("P {} {} {} {}", x, y, x2, y2)).unwrap_err();
        prop_assert_eq!(err.fault(), Some(PlacementFault::WrongSize));
    }

    #[test]
    fn illegal_guess_never_mutates(x in -50i64..50, y in -50i64..50) {
        prop_assume!(!(0..N).contains(&x) || !(0..N).contains(&y));
        let mut board = standard_board();
        let before = board.render();
        prop_assert_eq!(board.guess(x, y), GuessResult::Illegal);
        prop_assert_eq!(board.render(), before);
        prop_assert!(!board.cell(0, 0).unwrap().is_guessed());
    }

    #[test]
    fn repeated_guess_is_idempotent(x in 0..N, y in 0..N, repeats in 1usize..5) {
        let mut board = standard_board();
        let first = board.guess(x, y);
        let hits_before: Vec<usize> = board.ships().iter().map(|s| s.hits()).collect();
        for _ in 0..repeats {
            let again = board.guess(x, y);
            if first == GuessResult::Miss {
                prop_assert_eq!(again, GuessResult::MissAgain);
            } else {
                prop_assert_eq!(again, GuessResult::HitAgain);
            }
        }
        let hits_after: Vec<usize> = board.ships().iter().map(|s| s.hits()).collect();
        prop_assert_eq!(hits_before, hits_after);
    }

    #[test]
    fn ship_sinks_on_exactly_its_size(idx in 0..STANDARD.len(), rot in 0usize..5) {
        let mut board = standard_board();
        let ship = board.ships()[idx].clone();
        let mut cells = ship.positions().to_vec();
        // rotate to vary which cell lands the sinking hit
        let n = cells.len();
        cells.rotate_left(rot % n);
        let (last, rest) = cells.split_last().unwrap();
        for &(x, y) in rest {
            prop_assert_eq!(board.guess(x as i64, y as i64), GuessResult::Hit);
        }
        prop_assert_eq!(board.guess(last.0 as i64, last.1 as i64), GuessResult::Sunk(ship.kind()));
    }
}
