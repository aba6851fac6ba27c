use super::*;
use base64::{prelude::BASE64_STANDARD_NO_PAD, Engine};
use sha1::{Digest, Sha1};

/// Whether `name` can be used verbatim as an engine identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    RE_IDENTIFIER.is_match(name)
}

/// Quote a name for use in a CQL statement. Embedded double quotes are doubled,
/// so attribute names such as `content-type` survive unchanged.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Stable content hash of `key`: SHA-1, base64 without padding, with `+` and `/`
/// replaced by `_` so that the result is a legal identifier.
pub fn hash_key(key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    BASE64_STANDARD_NO_PAD
        .encode(hasher.finalize())
        .replace(&['+', '/'][..], "_")
}

fn valid_prefix(key: &str) -> &str {
    RE_IDENTIFIER_PREFIX
        .find(key)
        .map(|m| m.as_str())
        .unwrap_or("")
}

/// Derive an identifier matching `[a-zA-Z0-9_]+` that is at most `length`
/// characters long.
///
/// `_` is escaped to `__` and `.` (the domain separator) to `_`. Names that are
/// still legal and short enough are returned as they are. Longer ones are cut to
/// two thirds of the budget and completed with characters of [`hash_key`] of the
/// original name. Names with illegal characters keep their longest legal prefix
/// and fill the rest of the budget with hash characters.
///
/// The result is a pure function of `(key, length)`. `length` must be positive.
pub fn make_valid_key(key: &str, length: usize) -> String {
    let escaped = key.replace('_', "__").replace('.', "_");
    let head_len = length * 2 / 3;

    if !is_valid_identifier(&escaped) {
        let prefix = valid_prefix(&escaped);
        let prefix = &prefix[..prefix.len().min(head_len)];
        let hash = hash_key(key);
        let tail_len = (length - prefix.len()).min(hash.len());
        return format!("{}{}", prefix, &hash[..tail_len]);
    }

    if escaped.len() <= length {
        return escaped;
    }

    // A budget of one or two characters would otherwise leave no room for the hash.
    let hash = hash_key(key);
    let tail_len = (length / 3).max(1).min(length - head_len).min(hash.len());
    format!("{}{}", &escaped[..head_len], &hash[..tail_len])
}

/// Derive the keyspace holding the tables of `table` in the domain
/// `reverse_domain` (e.g. `org.wikipedia.en`).
///
/// The domain part gets `max(26, 48 - (len(table) - 3))` characters, at most
/// 44 so that one table character always fits. The table part takes the
/// remainder of the 48 character budget.
pub fn keyspace_name(reverse_domain: &str, table: &str) -> String {
    let separator_len = KEYSPACE_SEPARATOR.len();
    let prefix_budget = MIN_KEYSPACE_PREFIX_LENGTH
        .max((MAX_IDENTIFIER_LENGTH + 3).saturating_sub(table.len()))
        .min(MAX_IDENTIFIER_LENGTH - separator_len - 1);

    let prefix = make_valid_key(reverse_domain, prefix_budget);
    let suffix = make_valid_key(table, MAX_IDENTIFIER_LENGTH - prefix.len() - separator_len);
    format!("{}{}{}", prefix, KEYSPACE_SEPARATOR, suffix)
}
