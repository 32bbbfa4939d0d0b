use std::path::Path;
use std::sync::Arc;

pub type ChangeCallback = Arc<dyn Fn(&Path) + Send + Sync>;
