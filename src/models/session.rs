use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperatorRole {
    #[default]
    Staff,
    Admin,
}

impl OperatorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorRole::Staff => "staff",
            OperatorRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "staff" => Some(OperatorRole::Staff),
            "admin" => Some(OperatorRole::Admin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperatorRole::Staff => "Receptionist",
            OperatorRole::Admin => "Super Admin",
        }
    }
}

/// Who is operating the desk for the current request.
///
/// Passed explicitly to any view that gates on role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub role: OperatorRole,
}

impl SessionContext {
    pub fn new(role: OperatorRole) -> Self {
        Self { role }
    }

    pub fn can_view_analytics(&self) -> bool {
        self.role == OperatorRole::Admin
    }
}
