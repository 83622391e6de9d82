use crate::{
    abstract_trait::HashingTrait,
    errors::ServiceError,
    model::{Role, StoredUser},
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    pub user: StoredUser,
}

/// Accounts the login flow can authenticate against.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// One account per role, all sharing `password`.
    pub async fn demo(
        hashing: &(dyn HashingTrait + Send + Sync),
        password: &str,
    ) -> Result<Self, ServiceError> {
        let seeds = [
            ("1", "admin", "admin@klinik.com", "Administrator System", Role::Admin),
            ("2", "superadmin", "superadmin@cyberclaim.id", "Super Administrator", Role::Superadmin),
            ("3", "faskes", "faskes@klinik.com", "Klinik Pratama Sehat", Role::Faskes),
        ];

        let mut accounts = Vec::with_capacity(seeds.len());
        for (id, username, email, full_name, role) in seeds {
            let password_hash = hashing.hash_password(password).await?;
            accounts.push(Account {
                username: username.to_string(),
                password_hash,
                user: StoredUser {
                    id: id.to_string(),
                    username: username.to_string(),
                    email: email.to_string(),
                    full_name: full_name.to_string(),
                    role,
                    facility_id: Some("1".to_string()),
                    last_login: None,
                },
            });
        }

        info!("Seeded {} demo accounts", accounts.len());

        Ok(Self::new(accounts))
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
