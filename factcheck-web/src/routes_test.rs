//! Tests for the routing system
//!
//! Validates route paths and reply permalink parsing.

use super::MainRoute;
use shared::{layout::nav_entries, layout::NavTarget, reply_view::reply_path};
use yew_router::Routable;

/// Tests route paths
#[test]
fn test_route_paths() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Articles.to_path(), "/articles");
    assert_eq!(MainRoute::Replies.to_path(), "/replies");
    assert_eq!(
        MainRoute::Reply {
            id: "abc".to_string()
        }
        .to_path(),
        "/reply/abc"
    );
}

/// Tests reply permalink parsing
#[test]
fn test_reply_route_recognition() {
    let route = MainRoute::recognize("/reply/AVygFA0RyCdS-nWhuaWY");
    assert_eq!(
        route,
        Some(MainRoute::Reply {
            id: "AVygFA0RyCdS-nWhuaWY".to_string()
        })
    );
}

/// Tests unknown paths fall through to the not-found route
#[test]
fn test_unknown_path_is_not_found() {
    assert_eq!(
        MainRoute::recognize("/nowhere/at/all"),
        Some(MainRoute::NotFound)
    );
}

/// Permalinks built by the reply card resolve to the reply route
#[test]
fn test_reply_permalinks_match_route() {
    let path = reply_path("r1");
    assert_eq!(
        MainRoute::recognize(&path),
        Some(MainRoute::Reply {
            id: "r1".to_string()
        })
    );
}

/// Internal nav entries point at real routes
#[test]
fn test_nav_entries_resolve() {
    let links = shared::config::SiteLinks::default();
    for entry in nav_entries(&links) {
        if let NavTarget::Internal(path) = entry.target {
            let route = MainRoute::recognize(path);
            assert!(
                matches!(route, Some(MainRoute::Articles | MainRoute::Replies)),
                "{path}"
            );
        }
    }
}
