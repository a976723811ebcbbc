//! Validation limits shared by the identifier types.

/// Maximum length of a user name, in characters.
pub const MAX_USER_ID_LEN: usize = 256;
/// Maximum length of a sample node name, in characters.
pub const MAX_NODE_NAME_LEN: usize = 256;
/// Maximum length of a data unit sub-path, in characters.
pub const MAX_DATA_ID_LEN: usize = 256;
