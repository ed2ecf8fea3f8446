//! The access rules of every model reachable through `/api/model/*`.
//!
//! Each model carries one [`Rule`] per [`OpKind`]. Owner rules are resolved
//! row by row in [`super::enhanced`], everything else is decided here.

use derive_more::Display;
use std::str::FromStr;

use super::error::PolicyError;
use crate::models::user_app::AuthUser;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    #[display("pet")]
    Pet,
    #[display("medicine")]
    Medicine,
    #[display("medicationPackage")]
    MedicationPackage,
    #[display("prescription")]
    Prescription,
    #[display("room")]
    Room,
    #[display("serviceOption")]
    ServiceOption,
    #[display("serviceBooking")]
    ServiceBooking,
    #[display("boardingReservation")]
    BoardingReservation,
    #[display("notification")]
    Notification,
}

impl FromStr for Model {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pet" => Ok(Model::Pet),
            "medicine" => Ok(Model::Medicine),
            "medicationPackage" => Ok(Model::MedicationPackage),
            "prescription" => Ok(Model::Prescription),
            "room" => Ok(Model::Room),
            "serviceOption" => Ok(Model::ServiceOption),
            "serviceBooking" => Ok(Model::ServiceBooking),
            "boardingReservation" => Ok(Model::BoardingReservation),
            "notification" => Ok(Model::Notification),
            other => Err(PolicyError::UnknownModel(other.to_string())),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    #[display("findMany")]
    FindMany,
    #[display("findUnique")]
    FindUnique,
    #[display("create")]
    Create,
    #[display("update")]
    Update,
    #[display("delete")]
    Delete,
}

impl FromStr for Operation {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "findMany" => Ok(Operation::FindMany),
            "findUnique" => Ok(Operation::FindUnique),
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            other => Err(PolicyError::UnknownOperation(other.to_string())),
        }
    }
}

impl Operation {
    pub fn kind(&self) -> OpKind {
        match self {
            Operation::FindMany | Operation::FindUnique => OpKind::Read,
            Operation::Create => OpKind::Create,
            Operation::Update => OpKind::Update,
            Operation::Delete => OpKind::Delete,
        }
    }

    /// Whether the HTTP method may carry this operation
    pub fn accepts_method(&self, method: &ntex::http::Method) -> bool {
        use ntex::http::Method;

        match self {
            Operation::FindMany | Operation::FindUnique => *method == Method::GET,
            Operation::Create => *method == Method::POST,
            Operation::Update => *method == Method::PUT || *method == Method::PATCH,
            Operation::Delete => *method == Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Read,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Allow,
    Deny,
    Authenticated,
    Staff,
    OwnerOrStaff,
}

/// What an allowed caller may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    All,
    /// Only rows whose pet belongs to the caller
    OwnedOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelPolicy {
    pub read: Rule,
    pub create: Rule,
    pub update: Rule,
    pub delete: Rule,
}

impl ModelPolicy {
    pub fn rule(&self, kind: OpKind) -> Rule {
        match kind {
            OpKind::Read => self.read,
            OpKind::Create => self.create,
            OpKind::Update => self.update,
            OpKind::Delete => self.delete,
        }
    }
}

const CATALOG: ModelPolicy = ModelPolicy {
    read: Rule::Authenticated,
    create: Rule::Staff,
    update: Rule::Staff,
    delete: Rule::Staff,
};

const OWNED_BOOKING: ModelPolicy = ModelPolicy {
    read: Rule::OwnerOrStaff,
    create: Rule::OwnerOrStaff,
    update: Rule::OwnerOrStaff,
    delete: Rule::Staff,
};

pub fn policy_for(model: Model) -> ModelPolicy {
    match model {
        Model::Pet => ModelPolicy {
            read: Rule::OwnerOrStaff,
            create: Rule::Authenticated,
            update: Rule::OwnerOrStaff,
            delete: Rule::OwnerOrStaff,
        },
        Model::Medicine | Model::MedicationPackage | Model::Room => CATALOG,
        Model::ServiceOption => ModelPolicy {
            read: Rule::Allow,
            ..CATALOG
        },
        Model::Prescription => ModelPolicy {
            read: Rule::Staff,
            ..CATALOG
        },
        Model::ServiceBooking | Model::BoardingReservation => OWNED_BOOKING,
        Model::Notification => ModelPolicy {
            read: Rule::Authenticated,
            create: Rule::Staff,
            update: Rule::Staff,
            delete: Rule::Staff,
        },
    }
}

/// Decides a rule for `user`; owner checks are left to the caller
pub fn evaluate(rule: Rule, user: &AuthUser) -> Result<Access, PolicyError> {
    match rule {
        Rule::Allow | Rule::Authenticated => Ok(Access::All),
        Rule::Deny => Err(PolicyError::Forbidden("operation is not allowed".into())),
        Rule::Staff if user.is_staff() => Ok(Access::All),
        Rule::Staff => Err(PolicyError::Forbidden("staff only".into())),
        Rule::OwnerOrStaff if user.is_staff() => Ok(Access::All),
        Rule::OwnerOrStaff => Ok(Access::OwnedOnly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user_app::AccountRole;

    fn user(role: AccountRole) -> AuthUser {
        AuthUser {
            id: "u-1".into(),
            email: "u-1@petclinic.local".into(),
            role,
        }
    }

    #[test]
    fn test_parse_model_and_operation() {
        assert_eq!("medicationPackage".parse::<Model>().unwrap(), Model::MedicationPackage);
        assert_eq!("findMany".parse::<Operation>().unwrap(), Operation::FindMany);
        assert_eq!(
            "invoice".parse::<Model>(),
            Err(PolicyError::UnknownModel("invoice".into()))
        );
        assert!("upsert".parse::<Operation>().is_err());
    }

    #[test]
    fn test_customers_cannot_write_medicines() {
        let policy = policy_for(Model::Medicine);
        let customer = user(AccountRole::Customer);

        assert_eq!(evaluate(policy.rule(OpKind::Read), &customer), Ok(Access::All));
        for kind in [OpKind::Create, OpKind::Update, OpKind::Delete] {
            assert!(evaluate(policy.rule(kind), &customer).is_err());
        }
    }

    #[test]
    fn test_owner_rules_narrow_customers_only() {
        let rule = policy_for(Model::ServiceBooking).rule(OpKind::Read);

        assert_eq!(evaluate(rule, &user(AccountRole::Customer)), Ok(Access::OwnedOnly));
        assert_eq!(evaluate(rule, &user(AccountRole::Staff)), Ok(Access::All));
        assert_eq!(evaluate(rule, &user(AccountRole::Admin)), Ok(Access::All));
    }

    #[test]
    fn test_operation_methods() {
        use ntex::http::Method;

        assert!(Operation::Update.accepts_method(&Method::PATCH));
        assert!(Operation::Update.accepts_method(&Method::PUT));
        assert!(!Operation::FindMany.accepts_method(&Method::POST));
        assert!(Operation::Delete.accepts_method(&Method::DELETE));
    }
}
