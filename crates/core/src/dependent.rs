//! Dependent trait: records owned by a ledger and identified by name.

/// A record held in a ledger's roster.
///
/// The name is the record's identity: rosters reject a second dependent
/// whose name is exactly (case-sensitively) equal to an existing one.
pub trait Dependent {
    fn name(&self) -> &str;
}
