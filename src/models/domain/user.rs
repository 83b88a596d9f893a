use serde::{Deserialize, Serialize};

/// Identity issued by the external auth service. Referenced by id wherever
/// results are stored; never created or mutated by this application.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    pub fn new(id: &str, email: &str) -> Self {
        User {
            id: id.to_string(),
            email: email.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("user-1", "john@example.com");
        assert_eq!(user.id, "user-1");
        assert_eq!(user.email, "john@example.com");
    }
}
