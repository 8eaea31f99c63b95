/// Evaluate a quantified expression over `values`.
///
/// With `for_all` set this is `forall v :: predicate(v)`, otherwise
/// `exists v :: predicate(v)`. Stops at the first value whose predicate
/// differs from `for_all`, returning `!for_all`; an exhausted (or empty)
/// input returns `for_all`.
///
/// ```text
/// quantifier([2, 4, 6], true, |n| n % 2 == 0)  // true
/// quantifier(all_integers(), false, |n| n * n == 49)  // true, stops at 7
/// ```
pub fn quantifier<T>(
    values: impl IntoIterator<Item = T>,
    for_all: bool,
    mut predicate: impl FnMut(T) -> bool,
) -> bool {
    for value in values {
        if predicate(value) != for_all {
            return !for_all;
        }
    }
    for_all
}
