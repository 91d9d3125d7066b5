use battleship_batch::{BoardError, Ship, ShipKind, FLEET};

#[test]
fn test_kind_sizes() {
    let sizes: Vec<(char, usize)> = FLEET.iter().map(|k| (k.letter(), k.size())).collect();
    assert_eq!(sizes, vec![('A', 5), ('B', 4), ('S', 3), ('D', 3), ('P', 2)]);
}

#[test]
fn test_unknown_kind() {
    assert_eq!(ShipKind::from_char('C'), Err(BoardError::InvalidKind));
    assert_eq!(ShipKind::from_char('p'), Err(BoardError::InvalidKind));
}

#[test]
fn test_register_positions_in_order() {
    let mut ship = Ship::new(ShipKind::Destroyer);
    ship.register_position(4, 1);
    ship.register_position(4, 2);
    ship.register_position(4, 3);
    assert_eq!(ship.positions(), &[(4, 1), (4, 2), (4, 3)]);
    assert_eq!(ship.size(), 3);
}

#[test]
fn test_record_hit_and_sunk() {
    let mut ship = Ship::new(ShipKind::Battleship);
    for _ in 0..3 {
        assert!(!ship.record_hit());
        assert!(!ship.is_sunk());
    }
    assert!(ship.record_hit());
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), ship.size());
}
