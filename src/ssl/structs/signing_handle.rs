use std::collections::BTreeMap;
use crate::ssl::structs::key_entry::KeyEntry;

#[derive(Clone, Default)]
pub struct SigningHandle {
    pub(crate) entries: BTreeMap<String, KeyEntry>,
}
