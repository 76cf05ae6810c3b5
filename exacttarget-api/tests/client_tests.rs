//! End-to-end tests of the client against a mock API server
//!
//! Requests are matched on the form-encoded body, so each mock only answers
//! the action it is meant for and `expect(0)` proves a request was never sent.

use exacttarget_api::{
    ApiError, Attributes, Credentials, ExactTargetClient, SendToSubscriber, XmlClient,
    XmlClientConfig,
};
use mockito::{Matcher, Mock, ServerGuard};
use rstest::rstest;

const PATH: &str = "/integrate.aspx";

fn client_for(server: &ServerGuard) -> ExactTargetClient {
    ExactTargetClient::with_xml_client(
        Credentials::new("api_user", "api_pass"),
        XmlClient::with_config(
            XmlClientConfig::default().with_endpoint(format!("{}{}", server.url(), PATH)),
        ),
    )
}

/// Match a `<name>value</name>` element inside the form-encoded `XML` field
fn element(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!("{}%3E{}%3C%2F{}%3E", name, value, name))
}

fn action_mock(server: &mut ServerGuard, action: &str, body: &str) -> Mock {
    server
        .mock("POST", PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("qf".into(), "xml".into()),
            element("action", action),
        ]))
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(body)
}

fn document(system: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><exacttarget><system>{}</system></exacttarget>"#,
        system
    )
}

fn subscriber_record(list_name: &str, subid: &str) -> String {
    format!(
        "<subscriber><list_name>{}</list_name><Email__Address>jo@example.com</Email__Address><subid>{}</subid></subscriber>",
        list_name, subid
    )
}

#[rstest]
#[case("<diagnostics><Ping>Running</Ping></diagnostics>", true)]
#[case("<diagnostics><Ping>Down</Ping></diagnostics>", false)]
#[case("<diagnostics/>", false)]
fn test_check_online(#[case] system: &str, #[case] expected: bool) {
    let mut server = mockito::Server::new();
    let mock = action_mock(&mut server, "Ping", &document(system))
        .match_body(Matcher::AllOf(vec![
            element("username", "api_user"),
            element("password", "api_pass"),
            element("system_name", "diagnostics"),
            element("action", "Ping"),
        ]))
        .create();

    assert_eq!(client_for(&server).check_online().unwrap(), expected);
    mock.assert();
}

#[test]
fn test_add_subscriber_success() {
    let mut server = mockito::Server::new();
    let mock = action_mock(
        &mut server,
        "add",
        &document(
            "<subscriber><subscriber_info>Subscriber was added/updated successfully</subscriber_info>\
             <subscriber_description>98765</subscriber_description></subscriber>",
        ),
    )
    .match_body(Matcher::AllOf(vec![
        element("action", "add"),
        element("search_value", "123"),
        element("Email__Address", "jo%40example.com"),
        element("status", "active"),
        element("First__Name", "Jo"),
    ]))
    .create();

    let attributes = Attributes::new().text("first name", "Jo");
    let result = client_for(&server)
        .add_subscriber("jo@example.com", "123", &attributes)
        .unwrap();

    assert_eq!(result.as_deref(), Some("98765"));
    mock.assert();
}

#[test]
fn test_add_subscriber_failure_is_none() {
    let mut server = mockito::Server::new();
    let _mock = action_mock(
        &mut server,
        "add",
        &document("<subscriber><error>14</error><error_description>Invalid list</error_description></subscriber>"),
    )
    .create();

    let result = client_for(&server)
        .add_subscriber("jo@example.com", "999", &Attributes::new())
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_delete_subscriber_from_list() {
    let mut server = mockito::Server::new();
    let mock = action_mock(
        &mut server,
        "delete",
        &document("<subscriber><subscriber_info>Subscriber Deleted Sucessfully</subscriber_info></subscriber>"),
    )
    .match_body(Matcher::AllOf(vec![
        element("action", "delete"),
        element("search_type", "listid"),
        element("search_value", "123"),
        element("search_value2", "jo%40example.com"),
    ]))
    .create();

    assert!(client_for(&server)
        .delete_subscriber_from_list("jo@example.com", "123")
        .unwrap());
    mock.assert();
}

#[test]
fn test_delete_subscriber_by_id() {
    let mut server = mockito::Server::new();
    let mock = action_mock(
        &mut server,
        "delete",
        &document("<subscriber><subscriber_info>Subscriber not found</subscriber_info></subscriber>"),
    )
    .match_body(Matcher::AllOf(vec![
        element("search_type", "subid"),
        element("search_value", "1001"),
    ]))
    .create();

    assert!(!client_for(&server)
        .delete_subscriber("jo@example.com", "1001")
        .unwrap());
    mock.assert();
}

#[test]
fn test_retrieve_subscriber_picks_all_subscribers_list() {
    let mut server = mockito::Server::new();
    let body = document(&format!(
        "{}{}",
        subscriber_record("Marketing", "1001"),
        subscriber_record("All Subscribers", "1001")
    ));
    let _mock = action_mock(&mut server, "retrieve", &body).expect(2).create();
    let client = client_for(&server);

    let subscriber = client.retrieve_subscriber("jo@example.com", None).unwrap().unwrap();
    assert_eq!(subscriber.list_name(), Some("All Subscribers"));
    assert_eq!(subscriber.get("email_address"), Some("jo@example.com"));

    let all = client.retrieve_subscribers("jo@example.com", None).unwrap();
    let lists: Vec<_> = all.iter().map(|s| s.list_name().unwrap()).collect();
    assert_eq!(lists, vec!["Marketing", "All Subscribers"]);
}

#[test]
fn test_retrieve_subscriber_without_match() {
    let mut server = mockito::Server::new();
    let _mock = action_mock(
        &mut server,
        "retrieve",
        &document(&subscriber_record("Marketing", "1001")),
    )
    .create();

    assert!(client_for(&server)
        .retrieve_subscriber("jo@example.com", Some("55"))
        .unwrap()
        .is_none());
}

#[test]
fn test_send_by_address_resolves_then_sends() {
    let mut server = mockito::Server::new();
    let retrieve = action_mock(
        &mut server,
        "retrieve",
        &document(&subscriber_record("All Subscribers", "1001")),
    )
    .expect(1)
    .create();
    let send = action_mock(
        &mut server,
        "send_single",
        &document("<job><job_info>Job was successfully created.</job_info><job_description>5150</job_description></job>"),
    )
    .match_body(Matcher::AllOf(vec![
        element("action", "send_single"),
        element("search_type", "emailid"),
        element("search_value", "3003"),
        element("search_value2", "1001"),
        element("from_name", "News"),
    ]))
    .expect(1)
    .create();

    let job = client_for(&server)
        .send_to_subscriber(
            &SendToSubscriber::new("3003")
                .with_email_address("jo@example.com")
                .with_sender("News", "news@example.com"),
        )
        .unwrap();

    assert_eq!(job.as_deref(), Some("5150"));
    retrieve.assert();
    send.assert();
}

#[test]
fn test_send_by_unknown_address_never_sends() {
    let mut server = mockito::Server::new();
    let retrieve = action_mock(
        &mut server,
        "retrieve",
        &document("<subscriber><error>1</error><error_description>Subscriber not found</error_description></subscriber>"),
    )
    .expect(1)
    .create();
    let send = action_mock(&mut server, "send_single", &document("<job/>"))
        .expect(0)
        .create();

    let result = client_for(&server)
        .send_to_subscriber(&SendToSubscriber::new("3003").with_email_address("nobody@example.com"));

    match result {
        Err(ApiError::SubscriberNotFound(email)) => assert_eq!(email, "nobody@example.com"),
        other => panic!("Expected SubscriberNotFound, got {:?}", other),
    }
    retrieve.assert();
    send.assert();
}

#[test]
fn test_send_with_subscriber_id_skips_resolution() {
    let mut server = mockito::Server::new();
    let retrieve = action_mock(&mut server, "retrieve", &document("")).expect(0).create();
    let send = action_mock(
        &mut server,
        "send_single",
        &document("<job><job_info>Job was not created.</job_info></job>"),
    )
    .match_body(element("search_value2", "42"))
    .expect(1)
    .create();

    let job = client_for(&server)
        .send_to_subscriber(
            &SendToSubscriber::new("3003")
                .with_subscriber_id("42")
                .with_email_address("jo@example.com"),
        )
        .unwrap();

    assert_eq!(job, None);
    retrieve.assert();
    send.assert();
}

#[test]
fn test_malformed_response_is_parse_error() {
    let mut server = mockito::Server::new();
    let _mock = action_mock(&mut server, "Ping", "<exacttarget><system>").create();

    assert!(matches!(
        client_for(&server).check_online(),
        Err(ApiError::ParseError(_))
    ));
}

#[test]
fn test_http_error_status() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", PATH).with_status(500).create();

    assert!(matches!(
        client_for(&server).check_online(),
        Err(ApiError::HttpStatus(500))
    ));
}
