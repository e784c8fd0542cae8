const COPPER_PER_SILVER: u64 = 100;
const COPPER_PER_GOLD: u64 = 100 * COPPER_PER_SILVER;

/// Format a copper amount as `"1g 0s 50c"`.
///
/// Leading zero denominations are dropped; once a higher denomination is
/// shown every lower one follows, zero or not.
pub fn format_currency(amount: u64) -> String {
    let gold = amount / COPPER_PER_GOLD;
    let silver = (amount % COPPER_PER_GOLD) / COPPER_PER_SILVER;
    let copper = amount % COPPER_PER_SILVER;

    if gold > 0 {
        format!("{}g {}s {}c", gold, silver, copper)
    } else if silver > 0 {
        format!("{}s {}c", silver, copper)
    } else {
        format!("{}c", copper)
    }
}

/// Join names as an English enumeration: `"Ann, Bo, and Cy"`
pub fn format_list<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => "None".to_string(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
