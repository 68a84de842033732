use serde::{Deserialize, Serialize};

/// Closed set of access categories. The wire codes are exact and
/// case-sensitive; anything else is treated as no role at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Comun,
    Moderador,
    Logistica,
    Admin,
}

impl Role {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "COMUN" => Some(Self::Comun),
            "MODERADOR" => Some(Self::Moderador),
            "LOGISTICA" => Some(Self::Logistica),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Comun => "COMUN",
            Self::Moderador => "MODERADOR",
            Self::Logistica => "LOGISTICA",
            Self::Admin => "ADMIN",
        }
    }

    /// Landing panel for this role under the dashboard subtree.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Comun => "/dashboard/comun",
            Self::Moderador => "/dashboard/moderador",
            Self::Logistica => "/dashboard/logistica",
            Self::Admin => "/dashboard/admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for role in [Role::Comun, Role::Moderador, Role::Logistica, Role::Admin] {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Role::from_code("admin"), None);
        assert_eq!(Role::from_code("Admin"), None);
        assert_eq!(Role::from_code(""), None);
        assert_eq!(Role::from_code("SUPERVISOR"), None);
    }
}
