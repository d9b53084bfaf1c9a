use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::role::use_cases::assign_to_user::{
    AssignRoleToUserParams, AssignRoleToUserUseCase,
};
use business::domain::role::use_cases::create::{CreateRoleParams, CreateRoleUseCase};
use business::domain::role::use_cases::delete::{DeleteRoleParams, DeleteRoleUseCase};
use business::domain::role::use_cases::get_all::GetAllRolesUseCase;
use business::domain::role::use_cases::get_by_id::{GetRoleByIdParams, GetRoleByIdUseCase};

use crate::api::admin::dto::{AssignRoleRequest, CreateRoleRequest, RoleResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AdminApi {
    get_all_use_case: Arc<dyn GetAllRolesUseCase>,
    get_by_id_use_case: Arc<dyn GetRoleByIdUseCase>,
    create_use_case: Arc<dyn CreateRoleUseCase>,
    delete_use_case: Arc<dyn DeleteRoleUseCase>,
    assign_use_case: Arc<dyn AssignRoleToUserUseCase>,
}

impl AdminApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllRolesUseCase>,
        get_by_id_use_case: Arc<dyn GetRoleByIdUseCase>,
        create_use_case: Arc<dyn CreateRoleUseCase>,
        delete_use_case: Arc<dyn DeleteRoleUseCase>,
        assign_use_case: Arc<dyn AssignRoleToUserUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            delete_use_case,
            assign_use_case,
        }
    }
}

/// Role administration API
#[OpenApi]
impl AdminApi {
    /// List all roles
    #[oai(path = "/roles", method = "get", tag = "ApiTags::Admin")]
    async fn get_all_roles(&self) -> GetAllRolesResponse {
        match self.get_all_use_case.execute().await {
            Ok(roles) => {
                let responses: Vec<RoleResponse> = roles.into_iter().map(|r| r.into()).collect();
                GetAllRolesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllRolesResponse::InternalError(json)
            }
        }
    }

    /// Get a role by ID
    #[oai(path = "/roles/:id", method = "get", tag = "ApiTags::Admin")]
    async fn get_role_by_id(&self, id: Path<String>) -> GetRoleByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetRoleByIdResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "role.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetRoleByIdParams { id: uuid })
            .await
        {
            Ok(role) => GetRoleByIdResponse::Ok(Json(role.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRoleByIdResponse::NotFound(json),
                    _ => GetRoleByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a role
    ///
    /// Role names are unique; a duplicate is rejected with 400.
    #[oai(path = "/roles", method = "post", tag = "ApiTags::Admin")]
    async fn create_role(&self, body: Json<CreateRoleRequest>) -> CreateRoleResponse {
        let params = CreateRoleParams { name: body.0.name };

        match self.create_use_case.execute(params).await {
            Ok(role) => CreateRoleResponse::Created(Json(role.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRoleResponse::BadRequest(json),
                    _ => CreateRoleResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a role
    #[oai(path = "/roles/:id", method = "delete", tag = "ApiTags::Admin")]
    async fn delete_role(&self, id: Path<String>) -> DeleteRoleResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteRoleResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "role.invalid_id".to_string(),
                }));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteRoleParams { id: uuid })
            .await
        {
            Ok(()) => DeleteRoleResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteRoleResponse::NotFound(json),
                    _ => DeleteRoleResponse::InternalError(json),
                }
            }
        }
    }

    /// Grant a role to a user
    ///
    /// Rejects with 400 when the user already holds the role.
    #[oai(path = "/users/:user_id/roles", method = "post", tag = "ApiTags::Admin")]
    async fn assign_role(
        &self,
        user_id: Path<String>,
        body: Json<AssignRoleRequest>,
    ) -> AssignRoleResponse {
        let uuid = match Uuid::parse_str(&user_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AssignRoleResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "user.invalid_id".to_string(),
                }));
            }
        };

        let params = AssignRoleToUserParams {
            user_id: uuid,
            role_name: body.0.role_name,
        };

        match self.assign_use_case.execute(params).await {
            Ok(()) => AssignRoleResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AssignRoleResponse::BadRequest(json),
                    404 => AssignRoleResponse::NotFound(json),
                    _ => AssignRoleResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllRolesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RoleResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRoleByIdResponse {
    #[oai(status = 200)]
    Ok(Json<RoleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRoleResponse {
    #[oai(status = 201)]
    Created(Json<RoleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRoleResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AssignRoleResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
