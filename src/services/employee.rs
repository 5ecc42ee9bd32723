//! Employee management

use super::{conflict_on, require_positive};
use crate::core::error::{ConflictKind, EntityKind, SeatbookError, SeatbookResult};
use crate::core::repository::{EMPLOYEE_EMAIL_UNIQUE, EmployeeRepository};
use crate::dto::{AddEmployeeRequest, EmployeeDto, RemoveEmployeeRequest, UpdateEmployeeRequest};
use crate::entities::Employee;
use crate::entities::employee::validate_email;
use std::sync::Arc;

pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new employee
    ///
    /// Fails with `DuplicateEmail` when the address is already registered.
    pub async fn add(&self, request: &AddEmployeeRequest) -> SeatbookResult<EmployeeDto> {
        let employee = Employee::create(request)?;
        self.ensure_email_free(employee.email(), None).await?;

        let email = employee.email().to_string();
        let created = self
            .repository
            .add(employee)
            .await
            .map_err(|e| conflict_on(e, EMPLOYEE_EMAIL_UNIQUE, ConflictKind::DuplicateEmail { email }))?;

        tracing::info!(employee_id = created.employee_id(), "Employee added");
        Ok(EmployeeDto::from(&created))
    }

    pub async fn get_all(&self) -> SeatbookResult<Vec<EmployeeDto>> {
        let employees = self.repository.get_all().await?;
        Ok(employees.iter().map(EmployeeDto::from).collect())
    }

    pub async fn get_by_id(&self, employee_id: i32) -> SeatbookResult<EmployeeDto> {
        let employee = self.find(employee_id).await?;
        Ok(EmployeeDto::from(&employee))
    }

    pub async fn get_by_email(&self, email: &str) -> SeatbookResult<EmployeeDto> {
        validate_email(email)?;
        let employee = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| SeatbookError::NotFound {
                entity: EntityKind::Employee,
                key: format!("email {}", email),
            })?;
        Ok(EmployeeDto::from(&employee))
    }

    /// Replace name, email and role of an existing employee
    pub async fn update(&self, request: &UpdateEmployeeRequest) -> SeatbookResult<bool> {
        let mut employee = self.find(request.employee_id).await?;
        employee.update(request)?;
        self.ensure_email_free(employee.email(), Some(employee.employee_id()))
            .await?;

        let email = employee.email().to_string();
        let updated = self
            .repository
            .update(&employee)
            .await
            .map_err(|e| conflict_on(e, EMPLOYEE_EMAIL_UNIQUE, ConflictKind::DuplicateEmail { email }))?;

        tracing::info!(employee_id = employee.employee_id(), updated, "Employee updated");
        Ok(updated)
    }

    /// Delete the employee matching both id and email, with their bookings
    pub async fn remove(&self, request: &RemoveEmployeeRequest) -> SeatbookResult<bool> {
        require_positive("employeeId", request.employee_id)?;
        validate_email(&request.email)?;

        let matches = self
            .repository
            .get_by_id(request.employee_id)
            .await?
            .is_some_and(|e| e.email() == request.email);
        if !matches {
            tracing::debug!(employee_id = request.employee_id, "No employee with this id and email");
            return Err(SeatbookError::NotFound {
                entity: EntityKind::Employee,
                key: format!("id {} and email {}", request.employee_id, request.email),
            });
        }

        let removed = self.repository.remove(request.employee_id).await?;
        tracing::info!(employee_id = request.employee_id, removed, "Employee removed");
        Ok(removed)
    }

    /// Load an employee or fail with `NotFound`
    pub(crate) async fn find(&self, employee_id: i32) -> SeatbookResult<Employee> {
        require_positive("employeeId", employee_id)?;
        self.repository
            .get_by_id(employee_id)
            .await?
            .ok_or_else(|| SeatbookError::not_found_by_id(EntityKind::Employee, employee_id))
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i32>) -> SeatbookResult<()> {
        match self.repository.get_by_email(email).await? {
            Some(existing) if Some(existing.employee_id()) != owner => {
                tracing::debug!(email, "Email already registered");
                Err(ConflictKind::DuplicateEmail {
                    email: email.to_string(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}
