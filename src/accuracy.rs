//! Accuracy scoring against a stored reference value of pi.

/// Pi to 1100 decimal places.
pub const PI_REFERENCE: &str = concat!(
    "3.141592653589793238462643383279502884197169399375105820974944592307816406286208",
    "99862803482534211706798214808651328230664709384460955058223172535940812848111745",
    "02841027019385211055596446229489549303819644288109756659334461284756482337867831",
    "65271201909145648566923460348610454326648213393607260249141273724587006606315588",
    "17488152092096282925409171536436789259036001133053054882046652138414695194151160",
    "94330572703657595919530921861173819326117931051185480744623799627495673518857527",
    "24891227938183011949129833673362440656643086021394946395224737190702179860943702",
    "77053921717629317675238467481846766940513200056812714526356082778577134275778960",
    "91736371787214684409012249534301465495853710507922796892589235420199561121290219",
    "60864034418159813629774771309960518707211349999998372978049951059731732816096318",
    "59502445945534690830264252230825334468503526193118817101000313783875288658753320",
    "83814206171776691473035982534904287554687311595628638823537875937519577818577805",
    "32171226806613001927876611195909216420198938095257201065485863278865936153381827",
    "96823030195203530185296899577362259941389124972177528347913151",
);

/// Counts the leading decimal digits `candidate` shares with pi.
///
/// ```
/// use pi_bench::accuracy::correct_digits;
///
/// assert_eq!(correct_digits("3.1416"), 4);
/// assert_eq!(correct_digits("2.9"), 0);
/// ```
pub fn correct_digits(candidate: &str) -> usize {
    matching_digits(candidate, PI_REFERENCE)
}

/// Counts the leading digits two decimal strings have in common.
///
/// Decimal points are skipped; the count stops at the first differing
/// character, including a point in one string against a digit in the other.
pub fn matching_digits(candidate: &str, reference: &str) -> usize {
    candidate
        .chars()
        .zip(reference.chars())
        .take_while(|(lhs, rhs)| lhs == rhs)
        .filter(|(digit, _)| digit.is_ascii_digit())
        .count()
}
