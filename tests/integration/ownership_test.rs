//! Integration tests for creator-only access to wish lists.

mod helpers;

use http::StatusCode;
use serde_json::json;

use wishlist_core::types::{WishId, WishListId};
use wishlist_database::WishStore;

#[tokio::test]
async fn test_stranger_cannot_update() {
    let app = helpers::TestApp::new();
    let (_, owner) = app.sign_in();
    let (_, stranger) = app.sign_in();
    let id = app.create_list(&owner, "Birthday", "2024").await;

    let response = app
        .mutate(
            "wishList.update",
            json!({ "id": id, "name": "Hijacked", "description": "" }),
            &stranger,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let unchanged = app
        .query("wishList.getById", &format!("id={id}"), &owner)
        .await;
    assert_eq!(unchanged.body["data"]["name"], "Birthday");
    assert_eq!(unchanged.body["data"]["description"], "2024");
}

#[tokio::test]
async fn test_stranger_cannot_delete() {
    let app = helpers::TestApp::new();
    let (_, owner) = app.sign_in();
    let (_, stranger) = app.sign_in();
    let id = app.create_list(&owner, "Birthday", "2024").await;

    let response = app
        .mutate("wishList.delete", json!({ "id": id }), &stranger)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let still_there = app
        .query("wishList.getById", &format!("id={id}"), &owner)
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_stranger_cannot_read_wishes() {
    let app = helpers::TestApp::new();
    let (_, owner) = app.sign_in();
    let (_, stranger) = app.sign_in();
    let id = app.create_list(&owner, "Birthday", "2024").await;
    app.seed_wish(id.parse().unwrap(), "Bike").await;

    let response = app
        .query("wishList.getWishes", &format!("id={id}"), &stranger)
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_unknown_list_is_not_found_for_every_procedure() {
    let app = helpers::TestApp::new();
    let (_, token) = app.sign_in();
    let missing = WishListId::new().to_string();

    let by_id = app
        .query("wishList.getById", &format!("id={missing}"), &token)
        .await;
    assert_eq!(by_id.status, StatusCode::NOT_FOUND);

    let wishes = app
        .query("wishList.getWishes", &format!("id={missing}"), &token)
        .await;
    assert_eq!(wishes.status, StatusCode::NOT_FOUND);

    let update = app
        .mutate(
            "wishList.update",
            json!({ "id": missing, "name": "a", "description": "b" }),
            &token,
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app
        .mutate("wishList.delete", json!({ "id": missing }), &token)
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_into_strangers_list_is_forbidden() {
    let app = helpers::TestApp::new();
    let (_, owner) = app.sign_in();
    let (_, stranger) = app.sign_in();
    let mine = app.create_list(&owner, "Birthday", "2024").await;
    let theirs = app.create_list(&stranger, "Garden", "").await;
    let wish = app.seed_wish(mine.parse().unwrap(), "Bike").await;

    let response = app
        .mutate(
            "wishList.moveWishToWishList",
            json!({
                "wishId": wish.id,
                "fromWishListId": mine,
                "toWishListId": theirs,
            }),
            &owner,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let stored = WishStore::find_by_id(&app.store, wish.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.wish_list_id.to_string(), mine);
}

#[tokio::test]
async fn test_move_out_of_strangers_list_is_forbidden() {
    let app = helpers::TestApp::new();
    let (_, owner) = app.sign_in();
    let (_, stranger) = app.sign_in();
    let theirs = app.create_list(&stranger, "Garden", "").await;
    let mine = app.create_list(&owner, "Birthday", "2024").await;
    let wish = app.seed_wish(theirs.parse().unwrap(), "Rake").await;

    let response = app
        .mutate(
            "wishList.moveWishToWishList",
            json!({
                "wishId": wish.id,
                "fromWishListId": theirs,
                "toWishListId": mine,
            }),
            &owner,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_move_of_unknown_wish_between_owned_lists_is_not_found() {
    let app = helpers::TestApp::new();
    let (_, owner) = app.sign_in();
    let from = app.create_list(&owner, "Birthday", "2024").await;
    let to = app.create_list(&owner, "Holiday", "").await;

    let response = app
        .mutate(
            "wishList.moveWishToWishList",
            json!({
                "wishId": WishId::new(),
                "fromWishListId": from,
                "toWishListId": to,
            }),
            &owner,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
