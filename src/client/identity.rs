use std::sync::RwLock;

use crate::model::user::UserDto;

/// Storage for the user returned by sign-up or login.
///
/// The stored user's id is sent as `X-User-ID` on every request.
pub trait IdentityStore: Send + Sync {
    fn load(&self) -> Option<UserDto>;

    fn save(&self, user: &UserDto);

    fn clear(&self);
}

/// Identity kept in process memory for the lifetime of the client
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    user: RwLock<Option<UserDto>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Option<UserDto> {
        match self.user.read() {
            Ok(user) => user.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, user: &UserDto) {
        match self.user.write() {
            Ok(mut slot) => *slot = Some(user.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(user.clone()),
        }
    }

    fn clear(&self) {
        match self.user.write() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
