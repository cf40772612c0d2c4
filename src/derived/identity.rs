/// Stable per-record identity: normalized program name and organization
/// joined with `|`. Used for favorites tracking and UI element keys.
/// Distinct rows sharing an identical (name, org) pair collide and that is
/// accepted; no further deduplication happens here.
pub fn identity_key(program_name: &str, organization_name: &str) -> String {
    format!("{}|{}", squash(program_name), squash(organization_name))
}

fn squash(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
