use std::sync::Arc;

pub type DynNavigator = Arc<dyn NavigatorTrait + Send + Sync>;

/// Client-side router: moving to another page is the only side effect the
/// guards and the auth flow are allowed to perform.
pub trait NavigatorTrait {
    fn push(&self, path: &str);
}
