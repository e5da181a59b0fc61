use futures::executor::block_on;

use super::*;
use crate::controller::test_support::{FakePage, FakeReply};
use crate::state::status::Tone;

const LOGIN_HREF: &str = "http://bank.test/login";

fn redirects() -> Redirects {
    Redirects::default()
}

// =============================================================
// Non-OK replies
// =============================================================

#[test]
fn every_flow_reports_invalid_input_in_red() {
    for flow in [Flow::Login, Flow::Signup, Flow::Transaction] {
        let page = FakePage::at(LOGIN_HREF);
        block_on(handle_reply(flow, &page, FakeReply::with_status(400), &ClientConfig::default())).unwrap();

        let status = page.last_status().expect("status shown");
        assert_eq!(status.message, "invalid_input", "{flow:?}");
        assert_eq!(status.tone, Tone::Failure);
        assert_eq!(status.color(), "red");
        assert!(page.navigations().is_empty(), "{flow:?} must not navigate");
        assert!(page.balance.borrow().is_none());
    }
}

#[test]
fn server_error_is_also_invalid_input() {
    let page = FakePage::at(LOGIN_HREF);
    handle_signup(&page, &FakeReply::with_status(500), &redirects());
    assert_eq!(page.last_status(), Some(Status::invalid_input()));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_ok_without_return_to_goes_to_account() {
    let page = FakePage::at(LOGIN_HREF);
    handle_login(&page, &FakeReply::with_status(200), &redirects());
    assert_eq!(page.navigations(), vec!["/account"]);
    assert!(page.statuses.borrow().is_empty());
}

#[test]
fn login_ok_with_return_to_goes_there() {
    let page = FakePage::at("http://bank.test/login?return_to=%2Fdashboard");
    handle_login(&page, &FakeReply::with_status(204), &redirects());
    assert_eq!(page.navigations(), vec!["/dashboard"]);
}

#[test]
fn login_ok_with_malformed_return_to_falls_back() {
    let page = FakePage::at("http://bank.test/login?return_to=%");
    handle_login(&page, &FakeReply::with_status(200), &redirects());
    assert_eq!(page.navigations(), vec!["/account"]);
}

#[test]
fn login_follows_absolute_return_to_from_account_redirect() {
    let page = FakePage::at("http://bank.test/login?return_to=http%3A%2F%2Fbank.test%2Faccount");
    handle_login(&page, &FakeReply::with_status(200), &redirects());
    assert_eq!(page.navigations(), vec!["http://bank.test/account"]);
}

#[test]
fn login_redirect_target_cases() {
    let r = redirects();
    assert_eq!(login_redirect_target(LOGIN_HREF, &r), "/account");
    assert_eq!(login_redirect_target("http://bank.test/login?return_to=%2Fa%2520b", &r), "/a b");
    assert_eq!(login_redirect_target("http://bank.test/login?return_to=%25E0%25A4%25A", &r), "/account");
    assert_eq!(login_redirect_target("not a url", &r), "/account");
}

#[test]
fn login_redirect_uses_configured_param_and_default() {
    let r = Redirects { account: "/home".into(), home: "/".into(), return_to_param: "next".into() };
    assert_eq!(login_redirect_target("http://bank.test/login?return_to=%2Fx", &r), "/home");
    assert_eq!(login_redirect_target("http://bank.test/login?next=%2Fx", &r), "/x");
}

#[test]
fn return_to_reports_decode_errors() {
    assert_eq!(return_to(LOGIN_HREF, "return_to"), Ok(None));
    assert_eq!(return_to("http://bank.test/?return_to=%2Fok", "return_to"), Ok(Some("/ok".into())));
    assert!(matches!(
        return_to("http://bank.test/?return_to=%", "return_to"),
        Err(ClientError::MalformedUri { .. })
    ));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_ok_goes_to_account() {
    let page = FakePage::at("http://bank.test/signup?return_to=%2Felsewhere");
    handle_signup(&page, &FakeReply::with_status(200), &redirects());
    assert_eq!(page.navigations(), vec!["/account"]);
}

// =============================================================
// Transaction
// =============================================================

#[test]
fn transaction_ok_renders_balance_then_success() {
    let page = FakePage::at("http://bank.test/account");
    block_on(handle_transaction(&page, FakeReply::ok_with_body("42.50"))).unwrap();

    assert_eq!(page.balance.borrow().as_deref(), Some("$42.50"));
    let status = page.last_status().unwrap();
    assert_eq!(status.message, "success");
    assert_eq!(status.color(), "green");
    assert!(page.navigations().is_empty());
}

#[test]
fn transaction_unreadable_body_is_error_without_page_update() {
    let page = FakePage::at("http://bank.test/account");
    let err = block_on(handle_transaction(&page, FakeReply::unreadable())).unwrap_err();

    assert!(matches!(err, ClientError::Transport { .. }));
    assert!(page.balance.borrow().is_none());
    assert!(page.statuses.borrow().is_empty());
}

#[test]
fn transaction_non_ok_does_not_read_body() {
    let page = FakePage::at("http://bank.test/account");
    let reply = FakeReply { status: 400, body: Err(ClientError::transport("/transaction", "unused")) };
    block_on(handle_transaction(&page, reply)).unwrap();
    assert_eq!(page.last_status(), Some(Status::invalid_input()));
}
