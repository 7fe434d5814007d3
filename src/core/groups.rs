/// Splits a delimited list of names into individual trimmed names.
///
/// The source data separates producers with commas and with the literal
/// word " and ", sometimes both in the same field
/// ("A, B and C" names three producers). Empty pieces are dropped, so a
/// blank field yields an empty list.
pub fn split_group_list(raw: &str) -> Vec<String> {
    raw.replace(" and ", ",")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
