//! Contact page handler

use axum::{extract::State, response::Html};

use crate::view::DualFetchView;
use crate::AppState;

/// Renders the dual-fetch page
///
/// Each request is a fresh mount: both panels load, then the page is
/// rendered with whatever each path produced. The page's refresh button
/// simply requests this route again. The served HTML therefore never shows
/// the loading state; that lives in [`DualFetchView`] itself.
pub async fn contacts_page(State(state): State<AppState>) -> Html<String> {
    let mut view = DualFetchView::new();
    view.refresh(state.contacts.as_ref(), &state.client).await;
    Html(view.render())
}
