//! Employee entity

use crate::core::error::ValidationError;
use crate::core::validation::validators::{email_format, not_blank, string_length};
use crate::core::validation::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};
use crate::dto::{AddEmployeeRequest, UpdateEmployeeRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employee role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Role::User),
            1 => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "0" => Ok(Role::User),
            "admin" | "1" => Ok(Role::Admin),
            _ => Err(invalid_role(s)),
        }
    }
}

/// Role as it arrives on the wire: a name or a numeric code
///
/// Unknown values deserialize fine and fail later in [`RoleInput::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleInput {
    Code(i64),
    Name(String),
}

impl RoleInput {
    pub fn resolve(&self) -> Result<Role, ValidationError> {
        match self {
            RoleInput::Code(code) => {
                Role::from_code(*code).ok_or_else(|| invalid_role(&code.to_string()))
            }
            RoleInput::Name(name) => name.parse(),
        }
    }
}

impl From<Role> for RoleInput {
    fn from(role: Role) -> Self {
        RoleInput::Name(role.as_str().to_string())
    }
}

fn invalid_role(value: &str) -> ValidationError {
    ValidationError::field(
        "role",
        format!(
            "Invalid role type '{}'. Valid values are User(0) or Admin(1).",
            value
        ),
    )
}

/// A validated employee
///
/// `employee_id` is 0 until the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    employee_id: i32,
    name: String,
    email: String,
    role: Role,
}

impl Employee {
    pub fn create(request: &AddEmployeeRequest) -> Result<Self, ValidationError> {
        let role = validate(&request.name, &request.email, &request.role)?;
        Ok(Self {
            employee_id: 0,
            name: request.name.clone(),
            email: request.email.clone(),
            role,
        })
    }

    /// Apply an update after re-running the creation rules
    ///
    /// Nothing is changed when validation fails.
    pub fn update(&mut self, request: &UpdateEmployeeRequest) -> Result<(), ValidationError> {
        let role = validate(&request.name, &request.email, &request.role)?;
        self.name = request.name.clone();
        self.email = request.email.clone();
        self.role = role;
        Ok(())
    }

    /// Rebuild an employee from a stored row without validation
    pub(crate) fn from_row(employee_id: i32, name: String, email: String, role: Role) -> Self {
        Self {
            employee_id,
            name,
            email,
            role,
        }
    }

    pub(crate) fn with_id(mut self, employee_id: i32) -> Self {
        self.employee_id = employee_id;
        self
    }

    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// Email rules, shared with the lookup-by-email path
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    not_blank()("email", email)?;
    string_length(1, MAX_EMAIL_LENGTH)("email", email)?;
    email_format()("email", email)
}

// name -> email -> role
fn validate(name: &str, email: &str, role: &RoleInput) -> Result<Role, ValidationError> {
    not_blank()("name", name)?;
    string_length(1, MAX_NAME_LENGTH)("name", name)?;
    validate_email(email)?;
    role.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, role: RoleInput) -> AddEmployeeRequest {
        AddEmployeeRequest {
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    #[test]
    fn test_create_valid_employee() {
        let employee = Employee::create(&request(
            "Ada Lovelace",
            "ada@example.com",
            RoleInput::Code(1),
        ))
        .unwrap();
        assert_eq!(employee.employee_id(), 0);
        assert_eq!(employee.name(), "Ada Lovelace");
        assert_eq!(employee.role(), Role::Admin);
    }

    #[test]
    fn test_validation_order_name_first() {
        let err = Employee::create(&request("  ", "not-an-email", RoleInput::Code(7))).unwrap_err();
        assert_eq!(err.field_name(), Some("name"));

        let err = Employee::create(&request("Ada", "not-an-email", RoleInput::Code(7))).unwrap_err();
        assert_eq!(err.field_name(), Some("email"));

        let err = Employee::create(&request("Ada", "ada@example.com", RoleInput::Code(7))).unwrap_err();
        assert_eq!(err.field_name(), Some("role"));
    }

    #[test]
    fn test_name_too_long() {
        let err = Employee::create(&request(
            &"x".repeat(51),
            "ada@example.com",
            RoleInput::Code(0),
        ))
        .unwrap_err();
        assert_eq!(err.field_name(), Some("name"));
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(95));
        let err = Employee::create(&request("Ada", &email, RoleInput::Code(0))).unwrap_err();
        assert_eq!(err.field_name(), Some("email"));
    }

    #[test]
    fn test_role_names_and_codes() {
        assert_eq!(RoleInput::Name("admin".into()).resolve().unwrap(), Role::Admin);
        assert_eq!(RoleInput::Name("User".into()).resolve().unwrap(), Role::User);
        assert_eq!(RoleInput::Code(0).resolve().unwrap(), Role::User);
        assert!(RoleInput::Name("Manager".into()).resolve().is_err());
        assert!(RoleInput::Code(-1).resolve().is_err());
    }

    #[test]
    fn test_role_input_deserializes_both_forms() {
        let code: RoleInput = serde_json::from_str("1").unwrap();
        assert_eq!(code, RoleInput::Code(1));
        let name: RoleInput = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(name, RoleInput::Name("Admin".to_string()));
    }

    #[test]
    fn test_failed_update_leaves_employee_untouched() {
        let mut employee =
            Employee::create(&request("Ada", "ada@example.com", RoleInput::Code(0))).unwrap();
        let before = employee.clone();
        let result = employee.update(&UpdateEmployeeRequest {
            employee_id: 1,
            name: "Grace".to_string(),
            email: "broken".to_string(),
            role: RoleInput::Code(1),
        });
        assert!(result.is_err());
        assert_eq!(employee, before);
    }

    #[test]
    fn test_update_applies_fields() {
        let mut employee =
            Employee::create(&request("Ada", "ada@example.com", RoleInput::Code(0))).unwrap();
        employee
            .update(&UpdateEmployeeRequest {
                employee_id: 1,
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                role: RoleInput::Name("Admin".to_string()),
            })
            .unwrap();
        assert_eq!(employee.name(), "Grace");
        assert_eq!(employee.email(), "grace@example.com");
        assert_eq!(employee.role(), Role::Admin);
    }
}
