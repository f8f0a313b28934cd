use actix_web::{get, web};

use crate::modules::user::{model, service::UserService};
use crate::{
    api::{error, success},
    utils::{ValidatedQuery, pagination::Pageable},
};

#[get("")]
pub async fn search_users(
    user_service: web::Data<UserService>,
    query: ValidatedQuery<model::SearchUsersQuery>,
) -> Result<success::Success<Vec<model::UserResponse>>, error::Error> {
    let model::SearchUsersQuery { name, page, size } = query.0;
    let pageable = Pageable::of(page, size)?;
    let users = user_service.search_by_name(name, pageable).await?;
    Ok(success::Success::ok(users))
}
