use crate::Cursor;

#[test]
fn starts_before_first() {
    let items = ["a", "b"];
    let cursor = Cursor::new(&items);
    assert_eq!(cursor.index(), -1);
    assert!(cursor.bol());
    assert!(!cursor.eol());
    assert_eq!(cursor.value(), None);
    assert_eq!(cursor.peek_next(), Some(&"a"));
}

#[test]
fn next_walks_past_end() {
    let items = [10, 20];
    let mut cursor = Cursor::new(&items);
    assert_eq!(cursor.next(), Some(&10));
    assert_eq!(cursor.next(), Some(&20));
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.next(), None);
    assert!(cursor.eol());
    assert_eq!(cursor.index(), 2);

    // stays parked
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.index(), 2);
}

#[test]
fn prev_walks_past_start() {
    let items = [10, 20];
    let mut cursor = Cursor::new(&items);
    Cursor::last(&mut cursor);
    assert_eq!(cursor.prev(), Some(&10));
    assert_eq!(cursor.prev(), None);
    assert!(cursor.bol());
    assert_eq!(cursor.prev(), None);
    assert_eq!(cursor.index(), -1);
}

#[test]
fn peek_does_not_move() {
    let items = [1, 2, 3];
    let mut cursor = Cursor::new(&items);
    cursor.first();
    assert_eq!(cursor.peek_next(), Some(&2));
    assert_eq!(cursor.peek_prev(), None);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn value_at_out_of_bounds() {
    let items = [1, 2, 3];
    let cursor = Cursor::new(&items);
    assert_eq!(cursor.value_at(2), Some(&3));
    assert_eq!(cursor.value_at(3), None);
}

#[test]
fn set_index_clamps() {
    let items = [1, 2, 3];
    let mut cursor = Cursor::new(&items);
    cursor.set_index(10);
    assert_eq!(cursor.index(), 2);
    cursor.set_index(-4);
    assert_eq!(cursor.index(), 0);

    let empty: [i32; 0] = [];
    let mut cursor = Cursor::new(&empty);
    cursor.set_index(3);
    assert_eq!(cursor.index(), -1);
    assert_eq!(cursor.first(), None);
    assert_eq!(cursor.last(), None);
}

#[test]
fn push_pop_restores_exact_index() {
    let items = [1, 2, 3, 4];
    let mut cursor = Cursor::new(&items);
    cursor.next();
    cursor.push_index();
    cursor.next();
    cursor.push_index();
    cursor.next();
    cursor.next();
    assert_eq!(cursor.saved_depth(), 2);

    assert!(cursor.pop_index());
    assert_eq!(cursor.index(), 1);
    assert!(cursor.pop_index());
    assert_eq!(cursor.index(), 0);
    assert!(!cursor.pop_index());
}

#[test]
fn discard_keeps_position() {
    let items = [1, 2, 3];
    let mut cursor = Cursor::new(&items);
    cursor.push_index();
    cursor.next();
    cursor.next();
    cursor.discard_index();
    assert_eq!(cursor.index(), 1);
    assert_eq!(cursor.saved_depth(), 0);
}

#[test]
fn reset_clears_stack() {
    let items = [1, 2];
    let mut cursor = Cursor::new(&items);
    cursor.next();
    cursor.push_index();
    cursor.reset();
    assert_eq!(cursor.index(), -1);
    assert_eq!(cursor.saved_depth(), 0);
}

#[test]
fn iterates_remaining() {
    let items = [1, 2, 3];
    let mut cursor = Cursor::new(&items);
    cursor.first();
    let rest: Vec<_> = cursor.by_ref().copied().collect();
    assert_eq!(rest, vec![2, 3]);
    assert!(cursor.eol());
}

#[test]
fn restore_parks_at_ends() {
    let items = [1, 2];
    let mut cursor = Cursor::new(&items);
    cursor.restore(5);
    assert_eq!(cursor.index(), 2);
    cursor.restore(-3);
    assert_eq!(cursor.index(), -1);
}
