use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub(crate) config_dir: Option<PathBuf>,
}
