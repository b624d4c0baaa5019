//! Wish list procedure handlers.

use axum::Json;
use axum::extract::State;

use wishlist_core::error::AppError;
use wishlist_entity::wish::Wish;
use wishlist_entity::wish_list::WishList;
use wishlist_service::{
    CreateWishListRequest as SvcCreateWishList, MoveWishRequest as SvcMoveWish,
    UpdateWishListRequest as SvcUpdateWishList,
};

use crate::dto::request::{
    CreateWishListRequest, DeleteWishListRequest, MoveWishRequest, OptionalWishListIdQuery,
    UpdateWishListRequest, WishListIdQuery,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// GET /api/wishList.getAll
pub async fn get_all(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Vec<WishList>> {
    let lists = state.wish_list_service.list_all(&auth).await?;
    Ok(Json(ApiResponse::ok(lists)))
}

/// GET /api/wishList.getById?id=...
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<WishListIdQuery>,
) -> ApiResult<WishList> {
    // The list can vanish between the ownership check and the fetch.
    let list = state
        .wish_list_service
        .get_by_id(&auth, query.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Wish list {} not found", query.id)))?;
    Ok(Json(ApiResponse::ok(list)))
}

/// GET /api/wishList.getWishes?id=...
pub async fn get_wishes(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<OptionalWishListIdQuery>,
) -> ApiResult<Vec<Wish>> {
    let wishes = state.wish_list_service.get_wishes(&auth, query.id).await?;
    Ok(Json(ApiResponse::ok(wishes)))
}

/// POST /api/wishList.create
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateWishListRequest>,
) -> ApiResult<WishList> {
    let list = state
        .wish_list_service
        .create(
            &auth,
            SvcCreateWishList {
                name: req.name,
                description: req.description,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// POST /api/wishList.update
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateWishListRequest>,
) -> ApiResult<WishList> {
    let list = state
        .wish_list_service
        .update(
            &auth,
            req.id,
            SvcUpdateWishList {
                name: req.name,
                description: req.description,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(list)))
}

/// POST /api/wishList.delete
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<DeleteWishListRequest>,
) -> ApiResult<WishList> {
    let removed = state.wish_list_service.delete(&auth, req.id).await?;
    Ok(Json(ApiResponse::ok(removed)))
}

/// POST /api/wishList.moveWishToWishList
pub async fn move_wish_to_wish_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<MoveWishRequest>,
) -> ApiResult<Wish> {
    let wish = state
        .wish_list_service
        .move_wish_to_wish_list(
            &auth,
            SvcMoveWish {
                wish_id: req.wish_id,
                from_wish_list_id: req.from_wish_list_id,
                to_wish_list_id: req.to_wish_list_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(wish)))
}
