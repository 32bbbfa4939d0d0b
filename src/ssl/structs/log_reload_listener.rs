#[derive(Debug, Clone)]
pub struct LogReloadListener {
    pub(crate) name: String,
}
