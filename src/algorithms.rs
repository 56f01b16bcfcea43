/// Where a chord position falls relative to a strictly increasing list of knots
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Bracket {
    /// The value is exactly equal to the knot at this index
    Exact(usize),

    /// The value lies strictly between the knot at this index and the next one
    Between(usize),

    /// The value is below the first knot or above the last one
    Outside,
}

/// Locates `test_value` in `knots`, which must be strictly increasing. Equality is exact, no
/// tolerance is applied, so a value only matches a knot if it is bit-for-bit the same number.
pub fn bracket_search(knots: &[f64], test_value: f64) -> Bracket {
    let (first, last) = match (knots.first(), knots.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Bracket::Outside,
    };

    if test_value < first || test_value > last || test_value.is_nan() {
        return Bracket::Outside;
    }

    // Invariant: knots[a] <= test_value < knots[b], or test_value == knots[b] == last
    let mut a = 0;
    let mut b = knots.len() - 1;
    if test_value == last {
        return Bracket::Exact(b);
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= knots[check] {
            a = check;
        } else {
            b = check;
        }
    }

    if knots[a] == test_value {
        Bracket::Exact(a)
    } else {
        Bracket::Between(a)
    }
}
