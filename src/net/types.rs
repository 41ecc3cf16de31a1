//! Wire DTOs for the WorkFlow Pro REST backend.
//!
//! DESIGN
//! ======
//! Every response body is deserialized into one of these types at the
//! `net::api` boundary; a shape mismatch surfaces as `ApiError::Malformed`
//! instead of leaking partially-typed data into page code. Role strings are
//! normalized here because the backend has been observed emitting both capitalized
//! and lowercase variants.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Permission level attached to an identity, gating route access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Employee,
    Hr,
    Admin,
}

impl Role {
    /// Parse a wire or storage role string, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "employee" => Some(Self::Employee),
            "hr" => Some(Self::Hr),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Canonical display form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Hr => "HR",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown role {raw:?}")))
    }
}

/// The authenticated user's profile as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, also used as the worksheet/payment owner key.
    pub email: String,
    /// Permission level.
    pub role: Role,
    /// Profile photo URL, if provided at registration.
    #[serde(default)]
    pub photo: Option<String>,
    /// Job title, if provided.
    #[serde(default)]
    pub designation: Option<String>,
    /// Monthly salary, if assigned.
    #[serde(default)]
    pub salary: Option<f64>,
    /// Bank account number used for payroll.
    #[serde(default, rename = "bank_account_no")]
    pub bank_account: Option<String>,
    /// Whether HR has verified this account.
    #[serde(default, rename = "isVerified")]
    pub verified: bool,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSuccess {
    pub user: Identity,
    pub token: String,
}

/// Credentials for `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile fields for `POST /register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(rename = "bank_account_no", skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// One work entry on an employee's worksheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkSheet {
    #[serde(rename = "_id")]
    pub id: String,
    /// Task category (e.g. `"Sales"`, `"Development"`).
    pub task: String,
    #[serde(rename = "hoursWorked")]
    pub hours_worked: f64,
    /// ISO `YYYY-MM-DD` date the work was performed.
    pub date: String,
    /// Owner email; present on the HR-wide listing.
    #[serde(default, rename = "employeeEmail")]
    pub employee_email: Option<String>,
}

/// Envelope for `GET /work-sheets`.
#[derive(Clone, Debug, Deserialize)]
pub struct WorkSheetListResponse {
    #[serde(rename = "workSheets")]
    pub work_sheets: Vec<WorkSheet>,
}

/// Envelope for `GET /worksheets/all` (HR progress view).
#[derive(Clone, Debug, Deserialize)]
pub struct AllWorkSheetsResponse {
    pub worksheets: Vec<WorkSheet>,
}

/// Fields for creating or editing a work entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkSheetInput {
    pub task: String,
    #[serde(rename = "hoursWorked")]
    pub hours_worked: f64,
    pub date: String,
}

/// One salary payment made to the current employee.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Month name (e.g. `"January"`).
    pub month: String,
    pub year: i32,
    pub amount: f64,
    #[serde(default, rename = "transactionId")]
    pub transaction_id: Option<String>,
}

/// Envelope for `GET /payments`.
#[derive(Clone, Debug, Deserialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
}

/// Roster row for the HR employee list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmployeeSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, rename = "isVerified")]
    pub verified: bool,
    #[serde(default, rename = "bank_account_no")]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
}

/// Envelope for `GET /employee-list` and `GET /users/employees`.
#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeSummary>,
}

/// One month of salary history on the employee detail view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SalaryPayment {
    pub month: String,
    pub year: i32,
    pub amount: f64,
}

/// Detail view of a single employee (`GET /employee-details/{id}`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmployeeDetails {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    pub role: Role,
    #[serde(default, rename = "isFired")]
    pub fired: bool,
    #[serde(default)]
    pub salary: Option<f64>,
    /// Per-month salary history, oldest first.
    #[serde(default)]
    pub payments: Vec<SalaryPayment>,
}

/// Staff row for the admin roster (`GET /users/all`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StaffMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    pub role: Role,
    #[serde(default, rename = "isFired")]
    pub fired: bool,
}

/// Envelope for `GET /users/all`.
#[derive(Clone, Debug, Deserialize)]
pub struct StaffListResponse {
    pub users: Vec<StaffMember>,
}

/// Payroll processing state for a request row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    Pending,
    Completed,
}

/// A salary payment request raised by HR, processed by Admin.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PayrollRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    #[serde(rename = "employeeEmail")]
    pub employee_email: String,
    pub salary: f64,
    pub month: String,
    pub year: i32,
    pub status: PayrollStatus,
    #[serde(default, rename = "requestDate")]
    pub request_date: Option<String>,
    #[serde(default, rename = "paymentDate")]
    pub payment_date: Option<String>,
}

/// Envelope for `GET /payroll/requests`.
#[derive(Clone, Debug, Deserialize)]
pub struct PayrollRequestListResponse {
    pub requests: Vec<PayrollRequest>,
}

/// Body for `POST /payroll` (HR pay request).
#[derive(Clone, Debug, Serialize)]
pub struct PayrollRequestInput {
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    pub month: String,
    pub year: i32,
    pub amount: f64,
}

/// Body for `PATCH /users/{id}/salary`.
#[derive(Clone, Debug, Serialize)]
pub struct SalaryUpdate {
    #[serde(rename = "newSalary")]
    pub new_salary: f64,
}
