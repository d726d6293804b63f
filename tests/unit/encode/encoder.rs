use super::*;

#[test]
fn out_of_range_queries_are_light() {
    let sym = Symbol::from_fn(3, |_, _| true).unwrap();
    assert!(sym.is_dark(0, 0));
    assert!(sym.is_dark(2, 2));
    assert!(!sym.is_dark(-1, 0));
    assert!(!sym.is_dark(0, -4));
    assert!(!sym.is_dark(3, 0));
    assert!(!sym.is_dark(0, 3));
    assert!(!sym.is_dark(i32::MIN, i32::MAX));
}

#[test]
fn modules_are_row_major() {
    let sym = Symbol::from_fn(3, |x, y| x == 2 && y == 0).unwrap();
    assert!(sym.is_dark(2, 0));
    assert!(!sym.is_dark(0, 2));
    assert_eq!(sym.dark_count(), 1);
}

#[test]
fn side_must_be_odd_and_bounded() {
    assert!(Symbol::new(0, vec![]).is_err());
    assert!(Symbol::new(2, vec![false; 4]).is_err());
    assert!(Symbol::new(179, vec![false; 179 * 179]).is_err());
    assert!(Symbol::new(177, vec![false; 177 * 177]).is_ok());
}

#[test]
fn module_count_must_match_side() {
    let err = Symbol::new(21, vec![false; 20]).unwrap_err();
    assert!(matches!(err, QrsplitError::Validation(_)));
}
