//! Full skip-selection workflow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the controller
//! through the core client over real HTTP using ureq. Validates that request
//! building, response parsing and the state machine agree with the server.

use std::net::SocketAddr;

use skip_core::{
    Action, ClientConfig, FailureClass, HttpOutcome, HttpRequest, HttpResponse, PageView, SelectionController,
    SkipClient, SkipError, Status, TransportFailure,
};

/// Execute an `HttpRequest` using ureq and return the outcome.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data, letting the core interpret status.
fn execute(req: HttpRequest) -> HttpOutcome {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(req.timeout))
        .build()
        .new_agent();

    let mut builder = agent.get(&req.url);
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    let mut response = builder
        .call()
        .map_err(|e| TransportFailure::new(FailureClass::NoResponse, e.to_string()))?;

    Ok(HttpResponse {
        status: response.status().as_u16(),
        headers: Vec::new(),
        body: response.body_mut().read_to_string().unwrap_or_default(),
    })
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

fn fetch(client: &SkipClient, postcode: &str, area: Option<&str>) -> Result<Vec<skip_core::SkipOption>, SkipError> {
    let req = client.build_fetch_skips(postcode, area)?;
    client.parse_fetch_skips(execute(req))
}

#[test]
fn selection_workflow() {
    let addr = start_server();
    let client = SkipClient::new(ClientConfig::with_base_url(&format!("http://{addr}")));

    // Step 1: mount and fetch.
    let (mut controller, ticket) = SelectionController::mount();
    assert_eq!(PageView::from_state(controller.state()), PageView::Loading);
    assert!(controller.resolve(ticket, fetch(&client, "NR32", Some("Lowestoft"))));
    assert_eq!(controller.state().status, Status::Loaded);

    // Step 2: catalog is sorted by size.
    let sizes: Vec<u32> = controller.state().catalog.iter().map(|o| o.size).collect();
    assert_eq!(sizes, vec![4, 6, 8, 10, 12, 14, 16, 20, 40]);

    // Step 3: select the 4 yard skip and proceed.
    let mini = controller.state().catalog[0].id;
    assert!(controller.dispatch(Action::Select(mini)));
    let selection = controller.proceed().unwrap();
    assert_eq!(selection.skip.size, 4);
    assert_eq!(selection.total_price, 334);

    // Step 4: selecting it again clears the selection.
    assert!(controller.dispatch(Action::Select(mini)));
    assert!(controller.proceed().is_none());

    // Step 5: retry starts from scratch and reloads.
    let ticket = controller.reset();
    assert!(controller.state().catalog.is_empty());
    assert!(controller.resolve(ticket, fetch(&client, "nr32", None)));
    assert_eq!(controller.state().catalog.len(), 9);
}

#[test]
fn unknown_location_is_an_empty_result() {
    let addr = start_server();
    let client = SkipClient::new(ClientConfig::with_base_url(&format!("http://{addr}")));

    let err = fetch(&client, "ZZ99", None).unwrap_err();
    assert_eq!(err, SkipError::EmptyResult);

    let (mut controller, ticket) = SelectionController::mount();
    controller.resolve(ticket, Err(err));
    assert_eq!(
        controller.state().status,
        Status::Error("No skip options available for this location.".to_string())
    );
}

#[test]
fn server_message_is_surfaced() {
    let addr = start_server();
    let client = SkipClient::new(ClientConfig::with_base_url(&format!("http://{addr}")));

    // Bypass the client-side postcode check to hit the server's validation.
    let req = client.build_get("/skips/by-location", &[]).unwrap();
    let err = client.parse_fetch_skips(execute(req)).unwrap_err();
    assert_eq!(err.user_message(), "postcode is required");
}

#[test]
fn wrong_path_is_not_found() {
    let addr = start_server();
    let client = SkipClient::new(ClientConfig::with_base_url(&format!("http://{addr}/api")));

    let err = fetch(&client, "NR32", None).unwrap_err();
    assert_eq!(
        err.user_message(),
        "Resource not found. Please check your request and try again."
    );
}

#[test]
fn connection_refused_has_no_status() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = SkipClient::new(ClientConfig::with_base_url(&format!("http://{addr}")));

    match fetch(&client, "NR32", None).unwrap_err() {
        SkipError::Transport(err) => {
            assert_eq!(err.status, None);
            assert!(!err.message.is_empty());
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}
