use crate::infra::storage::entity::Model as UserEntity;
use users_sdk::User;

/// Convert a database entity to a contract model (owned version)
impl From<UserEntity> for User {
    fn from(e: UserEntity) -> Self {
        Self {
            id: e.id,
            privy_id: e.privy_id,
            email: e.email,
            display_name: e.display_name,
            avatar_url: e.avatar_url,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
