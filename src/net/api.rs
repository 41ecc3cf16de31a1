//! Typed REST helpers for the WorkFlow Pro backend.
//!
//! Client-side (hydrate): real HTTP calls through the authenticated gateway.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status interpretation happens here, not in the gateway: non-2xx responses
//! become `ApiError::Rejected` carrying the server message, and bodies that
//! fail schema validation become `ApiError::Malformed`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway::Gateway;
use super::types::{
    EmployeeDetails, EmployeeSummary, Payment, PayrollRequest, PayrollRequestInput, SalaryUpdate,
    StaffMember, WorkSheet, WorkSheetInput,
};

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, Response};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use super::error::{ErrorBody, rejection_message};
#[cfg(feature = "hydrate")]
use super::types::{
    AllWorkSheetsResponse, EmployeeListResponse, PaymentListResponse, PayrollRequestListResponse,
    StaffListResponse, WorkSheetListResponse,
};

#[cfg(any(test, feature = "hydrate"))]
fn work_sheet_endpoint(id: &str) -> String {
    format!("/work-sheets/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_endpoint(id: &str) -> String {
    format!("/users/{id}/verify")
}

#[cfg(any(test, feature = "hydrate"))]
fn fire_endpoint(id: &str) -> String {
    format!("/users/{id}/fire")
}

#[cfg(any(test, feature = "hydrate"))]
fn make_hr_endpoint(id: &str) -> String {
    format!("/users/{id}/make-hr")
}

#[cfg(any(test, feature = "hydrate"))]
fn salary_endpoint(id: &str) -> String {
    format!("/users/{id}/salary")
}

#[cfg(any(test, feature = "hydrate"))]
fn employee_details_endpoint(id: &str) -> String {
    format!("/employee-details/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn payroll_approve_endpoint(id: &str) -> String {
    format!("/payroll/requests/{id}/approve")
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Turn a non-ok response into `Rejected`, reading the body message if any.
#[cfg(feature = "hydrate")]
async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body_message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Rejected {
        status,
        message: rejection_message(status, body_message),
    }
}

/// Validate an ok response body against `T`.
#[cfg(feature = "hydrate")]
pub(crate) async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response.json::<T>().await.map_err(|_| ApiError::Malformed)
}

/// Accept any ok response, discarding the body.
#[cfg(feature = "hydrate")]
async fn expect_ok(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(rejection(response).await);
    }
    Ok(())
}

/// Fetch the current employee's work entries from `GET /work-sheets`.
pub async fn fetch_work_sheets(gateway: Gateway) -> Result<Vec<WorkSheet>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/work-sheets").await?;
        let list: WorkSheetListResponse = expect_json(response).await?;
        Ok(list.work_sheets)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Add a work entry via `POST /work-sheets`.
pub async fn create_work_sheet(gateway: Gateway, input: &WorkSheetInput) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.submit(Method::POST, "/work-sheets", input).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, input);
        Err(not_available())
    }
}

/// Edit a work entry via `PATCH /work-sheets/{id}`.
pub async fn update_work_sheet(
    gateway: Gateway,
    id: &str,
    input: &WorkSheetInput,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway
            .submit(Method::PATCH, &work_sheet_endpoint(id), input)
            .await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id, input);
        Err(not_available())
    }
}

/// Remove a work entry via `DELETE /work-sheets/{id}`.
pub async fn delete_work_sheet(gateway: Gateway, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway
            .fetch(Method::DELETE, &work_sheet_endpoint(id))
            .await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id);
        Err(not_available())
    }
}

/// Fetch the current employee's salary payments from `GET /payments`.
pub async fn fetch_payments(gateway: Gateway) -> Result<Vec<Payment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/payments").await?;
        let list: PaymentListResponse = expect_json(response).await?;
        Ok(list.payments)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Fetch the HR employee roster from `GET /employee-list`.
pub async fn fetch_employee_list(gateway: Gateway) -> Result<Vec<EmployeeSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/employee-list").await?;
        let list: EmployeeListResponse = expect_json(response).await?;
        Ok(list.employees)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Flip an employee's verified flag via `PATCH /users/{id}/verify`.
pub async fn toggle_verified(gateway: Gateway, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::PATCH, &verify_endpoint(id)).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id);
        Err(not_available())
    }
}

/// Raise a salary payment request via `POST /payroll`.
pub async fn request_payment(
    gateway: Gateway,
    input: &PayrollRequestInput,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.submit(Method::POST, "/payroll", input).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, input);
        Err(not_available())
    }
}

/// Fetch one employee's detail view from `GET /employee-details/{id}`.
pub async fn fetch_employee_details(gateway: Gateway, id: &str) -> Result<EmployeeDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway
            .fetch(Method::GET, &employee_details_endpoint(id))
            .await?;
        expect_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id);
        Err(not_available())
    }
}

/// Mark an employee as fired via `PATCH /users/{id}/fire`.
pub async fn fire_employee(gateway: Gateway, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::PATCH, &fire_endpoint(id)).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id);
        Err(not_available())
    }
}

/// Promote an employee to HR via `PATCH /users/{id}/make-hr`.
pub async fn promote_to_hr(gateway: Gateway, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::PATCH, &make_hr_endpoint(id)).await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id);
        Err(not_available())
    }
}

/// Adjust an employee's salary via `PATCH /users/{id}/salary`.
pub async fn update_salary(
    gateway: Gateway,
    id: &str,
    update: &SalaryUpdate,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway
            .submit(Method::PATCH, &salary_endpoint(id), update)
            .await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id, update);
        Err(not_available())
    }
}

/// Fetch every employee's work entries from `GET /worksheets/all`.
pub async fn fetch_all_work_sheets(gateway: Gateway) -> Result<Vec<WorkSheet>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/worksheets/all").await?;
        let list: AllWorkSheetsResponse = expect_json(response).await?;
        Ok(list.worksheets)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Fetch all employees for the progress filters from `GET /users/employees`.
pub async fn fetch_all_employees(gateway: Gateway) -> Result<Vec<EmployeeSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/users/employees").await?;
        let list: EmployeeListResponse = expect_json(response).await?;
        Ok(list.employees)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Fetch the full verified staff roster from `GET /users/all`.
pub async fn fetch_all_staff(gateway: Gateway) -> Result<Vec<StaffMember>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/users/all").await?;
        let list: StaffListResponse = expect_json(response).await?;
        Ok(list.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Fetch payroll requests for admin processing from `GET /payroll/requests`.
pub async fn fetch_payroll_requests(gateway: Gateway) -> Result<Vec<PayrollRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway.fetch(Method::GET, "/payroll/requests").await?;
        let list: PayrollRequestListResponse = expect_json(response).await?;
        Ok(list.requests)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
        Err(not_available())
    }
}

/// Approve and pay a payroll request via `PUT /payroll/requests/{id}/approve`.
pub async fn approve_payroll_request(gateway: Gateway, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gateway
            .submit(Method::PUT, &payroll_approve_endpoint(id), &serde_json::json!({}))
            .await?;
        expect_ok(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, id);
        Err(not_available())
    }
}
