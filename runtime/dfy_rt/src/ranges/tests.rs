use super::*;
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().copied().map(BigInt::from).collect()
}

#[test]
fn bounded_range_is_half_open() {
    let got: Vec<_> = integer_range(Some(BigInt::from(-2)), Some(BigInt::from(2))).collect();
    assert_eq!(got, ints(&[-2, -1, 0, 1]));
    assert_eq!(
        integer_range(Some(BigInt::from(3)), Some(BigInt::from(3))).count(),
        0
    );
    assert_eq!(
        integer_range(Some(BigInt::from(5)), Some(BigInt::from(1))).next(),
        None
    );
}

#[test]
fn unbounded_ranges() {
    let up: Vec<_> = integer_range(Some(BigInt::from(7)), None).take(3).collect();
    assert_eq!(up, ints(&[7, 8, 9]));

    let down: Vec<_> = integer_range(None, Some(BigInt::from(0))).take(3).collect();
    assert_eq!(down, ints(&[-1, -2, -3]));
}

#[test]
fn all_integers_alternate_by_magnitude() {
    let got: Vec<_> = all_integers().take(7).collect();
    assert_eq!(got, ints(&[0, 1, -1, 2, -2, 3, -3]));
}

#[test]
fn size_hint_of_bounded_range() {
    let range = integer_range(Some(BigInt::from(0)), Some(BigInt::from(10)));
    assert_eq!(range.size_hint(), (10, Some(10)));
    assert_eq!(all_integers().size_hint(), (usize::MAX, None));
}

#[test]
fn chars_skip_surrogates() {
    let options = RuntimeOptions::default();
    let chars: Vec<char> = all_chars(&options).collect();
    assert_eq!(chars.first(), Some(&'\0'));
    assert_eq!(chars.last(), Some(&'\u{FFFF}'));
    assert_eq!(chars.len(), 0x10000 - 0x800);

    let unicode = RuntimeOptions {
        unicode_chars: true,
        ..RuntimeOptions::default()
    };
    assert_eq!(all_chars(&unicode).last(), Some(char::MAX));
}

#[test]
fn booleans_and_single_value() {
    assert_eq!(all_booleans().collect::<Vec<_>>(), vec![false, true]);
    assert_eq!(single_value("only").collect::<Vec<_>>(), vec!["only"]);
}

#[test]
fn doubler_doubles() {
    let got: Vec<_> = Doubler::new(3).take(5).collect();
    assert_eq!(got, ints(&[6, 12, 24, 48, 96]));
    let from_one: Vec<_> = Doubler::new(1).take(3).collect();
    assert_eq!(from_one, ints(&[2, 4, 8]));
}

#[test]
fn doubler_is_single_pass() {
    let mut doubler = Doubler::new(1);
    assert_eq!(doubler.next(), Some(BigInt::from(2)));
    let rest: Vec<_> = doubler.take(2).collect();
    assert_eq!(rest, ints(&[4, 8]));
}
