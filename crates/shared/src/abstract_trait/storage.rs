use std::sync::Arc;

pub type DynClientStorage = Arc<dyn ClientStorageTrait + Send + Sync>;

/// String key/value store with the semantics of browser web storage.
pub trait ClientStorageTrait {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
    fn clear(&self);
}
