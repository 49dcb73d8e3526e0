use crate::repositories::sessions::SessionStore;

/// Access to the backing stores a request needs. Which session store backend
/// sits behind this is a deployment detail decided once at startup.
pub trait Context: Sync + Send {
    fn sessions(&self) -> &dyn SessionStore;
}
