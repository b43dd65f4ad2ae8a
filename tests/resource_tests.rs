//! Integration tests for the resource query wrappers.
//!
//! These tests verify that every wrapper calls its `<resource>.get` method,
//! decodes typed records, reports empty results as not found, and passes
//! other failures through unchanged.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header_exists, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zabbix_api::resources::common::SelectQuery;
use zabbix_api::resources::*;
use zabbix_api::{Endpoint, RpcError, Session, SessionRecord};

/// Creates a session that is already logged in to a 7.0 server.
fn create_test_session(server: &MockServer) -> Session {
    let record: SessionRecord = serde_json::from_value(json!({
        "url": format!("{}/api_jsonrpc.php", server.uri()),
        "token": "test-token",
        "apiVersion": "7.0.0"
    }))
    .unwrap();
    Session::from_record(record, None)
}

async fn mount_result(server: &MockServer, rpc: &str, result: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": rpc})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": result,
            "id": 1
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Typed Results
// ============================================================================

#[tokio::test]
async fn test_get_hosts_returns_typed_records() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "host.get",
        json!([
            {"hostid": "10084", "host": "Zabbix server", "status": "0"},
            {"hostid": "10085", "host": "db-01", "status": "1"}
        ]),
    )
    .await;

    let session = create_test_session(&server);
    let hosts = session.get_hosts(&HostGetParams::default()).await.unwrap();

    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0].host_id, "10084");
    assert!(hosts[0].is_monitored());
    assert!(!hosts[1].is_monitored());
}

#[tokio::test]
async fn test_params_are_sent_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "trigger.get",
            "params": {
                "output": "extend",
                "hostids": ["10084"],
                "selectLastEvent": "extend"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": [{"triggerid": "13491", "priority": "4", "lastEvent": []}],
            "id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = TriggerGetParams {
        common: GetParameters {
            output: Some(SelectQuery::Extend),
            ..Default::default()
        },
        host_ids: vec!["10084".to_string()],
        select_last_event: Some(SelectQuery::Extend),
        ..Default::default()
    };
    let session = create_test_session(&server);
    let triggers = session.get_triggers(&params).await.unwrap();

    assert_eq!(triggers[0].trigger_id, "13491");
    assert!(triggers[0].last_event.is_none());
}

#[tokio::test]
async fn test_each_wrapper_calls_its_method() {
    let server = MockServer::start().await;
    let methods = [
        ("action.get", json!([{"actionid": "3"}])),
        ("alert.get", json!([{"alertid": "1"}])),
        ("event.get", json!([{"eventid": "9"}])),
        ("history.get", json!([{"itemid": "23296", "clock": "1351090996", "value": "1"}])),
        ("hostgroup.get", json!([{"groupid": "4"}])),
        ("hostinterface.get", json!([{"interfaceid": "1"}])),
        ("item.get", json!([{"itemid": "23296"}])),
        ("maintenance.get", json!([{"maintenanceid": "3"}])),
        ("mediatype.get", json!([{"mediatypeid": "1"}])),
        ("proxy.get", json!([{"proxyid": "10451"}])),
        ("user.get", json!([{"userid": "1"}])),
        ("usermacro.get", json!([{"hostmacroid": "9", "hostid": "10084"}])),
    ];
    for (rpc, result) in methods {
        mount_result(&server, rpc, result).await;
    }

    let session = create_test_session(&server);

    assert_eq!(session.get_actions(&ActionGetParams::default()).await.unwrap()[0].action_id, "3");
    assert_eq!(session.get_alerts(&AlertGetParams::default()).await.unwrap()[0].alert_id, "1");
    assert_eq!(session.get_events(&EventGetParams::default()).await.unwrap()[0].event_id, "9");
    assert_eq!(session.get_history(&HistoryGetParams::default()).await.unwrap()[0].item_id, 23296);
    assert_eq!(
        session.get_host_groups(&HostGroupGetParams::default()).await.unwrap()[0].group_id,
        "4"
    );
    assert_eq!(
        session
            .get_host_interfaces(&HostInterfaceGetParams::default())
            .await
            .unwrap()[0]
            .interface_id,
        "1"
    );
    assert_eq!(session.get_items(&ItemGetParams::default()).await.unwrap()[0].item_id, "23296");
    assert_eq!(
        session
            .get_maintenances(&MaintenanceGetParams::default())
            .await
            .unwrap()[0]
            .maintenance_id,
        "3"
    );
    assert_eq!(
        session
            .get_media_types(&MediaTypeGetParams::default())
            .await
            .unwrap()[0]
            .media_type_id,
        "1"
    );
    assert_eq!(session.get_proxies(&ProxyGetParams::default()).await.unwrap()[0].proxy_id, "10451");
    assert_eq!(session.get_users(&UserGetParams::default()).await.unwrap()[0].user_id, "1");
    assert_eq!(
        session
            .get_user_macros(&UserMacroGetParams::default())
            .await
            .unwrap()[0]
            .host_id,
        "10084"
    );
}

#[tokio::test]
async fn test_trait_get_matches_session_method() {
    let server = MockServer::start().await;
    mount_result(&server, "hostgroup.get", json!([{"groupid": "2", "name": "Linux servers"}]))
        .await;

    let session = create_test_session(&server);
    let groups = HostGroup::get(&session, &HostGroupGetParams::default())
        .await
        .unwrap();

    assert_eq!(groups[0].name, "Linux servers");
}

// ============================================================================
// Empty Results and Errors
// ============================================================================

#[tokio::test]
async fn test_empty_result_is_not_found() {
    let server = MockServer::start().await;
    mount_result(&server, "host.get", json!([])).await;

    let session = create_test_session(&server);
    let error = session
        .get_hosts(&HostGetParams::default())
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    assert!(matches!(error, RpcError::NotFound(_)));
}

#[tokio::test]
async fn test_api_error_is_not_masked_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32602,
                "message": "Invalid params.",
                "data": "Invalid parameter \"/\": unexpected parameter \"bogus\"."
            },
            "id": 1
        })))
        .mount(&server)
        .await;

    let session = create_test_session(&server);
    let error = session
        .get_items(&ItemGetParams::default())
        .await
        .unwrap_err();

    assert!(!error.is_not_found());
    assert!(matches!(error, RpcError::Api(ref e) if e.code == -32602));
}

#[tokio::test]
async fn test_wrong_result_shape_is_decode_error() {
    let server = MockServer::start().await;
    mount_result(&server, "proxy.get", json!({"proxyid": "10451"})).await;

    let session = create_test_session(&server);
    let error = session
        .get_proxies(&ProxyGetParams::default())
        .await
        .unwrap_err();

    assert!(matches!(error, RpcError::Decode(_)));
}

#[tokio::test]
async fn test_unauthenticated_session_sends_no_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "apiinfo.version"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": "7.0.0",
            "id": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(401))
        .with_priority(1)
        .expect(0)
        .mount(&server)
        .await;
    mount_result(&server, "hostgroup.get", json!([{"groupid": "1"}])).await;

    let session = Session::new(
        Endpoint::new(format!("{}/api_jsonrpc.php", server.uri())).unwrap(),
        None,
    );
    let groups = session
        .get_host_groups(&HostGroupGetParams::default())
        .await
        .unwrap();

    assert_eq!(groups[0].group_id, "1");
}

#[tokio::test]
async fn test_unauthenticated_call_surfaces_api_error() {
    let server = MockServer::start().await;
    mount_result(&server, "apiinfo.version", json!("7.0.0")).await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "hostgroup.get"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32602,
                "message": "Invalid params.",
                "data": "Not authorized."
            },
            "id": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(
        Endpoint::new(format!("{}/api_jsonrpc.php", server.uri())).unwrap(),
        None,
    );
    let error = session
        .get_host_groups(&HostGroupGetParams::default())
        .await
        .unwrap_err();

    assert!(!error.is_not_found());
    assert!(matches!(
        error,
        RpcError::Api(ref e) if e.code == -32602 && e.data == "Not authorized."
    ));
}

// ============================================================================
// Related Objects
// ============================================================================

#[tokio::test]
async fn test_select_count_decodes_related_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "host.get",
            "params": {"selectItems": "count"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": [{"hostid": "10084", "items": "42"}],
            "id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = HostGetParams {
        select_items: Some(SelectQuery::Count),
        ..Default::default()
    };
    let session = create_test_session(&server);
    let hosts = session.get_hosts(&params).await.unwrap();

    assert_eq!(hosts[0].items, Related::Count(42));
    assert_eq!(hosts[0].items.count(), 42);
    assert!(hosts[0].items.is_empty());
}

#[tokio::test]
async fn test_select_extend_decodes_related_objects() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "host.get",
        json!([{
            "hostid": "10084",
            "items": [{"itemid": "23296"}, {"itemid": "23297"}]
        }]),
    )
    .await;

    let params = HostGetParams {
        select_items: Some(SelectQuery::Extend),
        ..Default::default()
    };
    let session = create_test_session(&server);
    let hosts = session.get_hosts(&params).await.unwrap();

    assert_eq!(hosts[0].items.count(), 2);
    assert_eq!(hosts[0].items[1].item_id, "23297");
}

#[tokio::test]
async fn test_both_group_selections_decode_together() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "host.get",
            "params": {"selectGroups": "extend", "selectHostGroups": "extend"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": [{
                "hostid": "10084",
                "groups": [{"groupid": "4"}],
                "hostgroups": [{"groupid": "4"}]
            }],
            "id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = HostGetParams {
        select_groups: Some(SelectQuery::Extend),
        select_host_groups: Some(SelectQuery::Extend),
        ..Default::default()
    };
    let session = create_test_session(&server);
    let hosts = session.get_hosts(&params).await.unwrap();

    assert_eq!(hosts[0].groups[0].group_id, "4");
    assert_eq!(hosts[0].host_groups[0].group_id, "4");
}
