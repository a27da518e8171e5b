mod common;

use common::{answers, glue, naptr, srv, MockDns};
use sdscan_core::Probe;
use sdscan_probe::{DnsMessage, ProbeConfig, Prober, RecordType};

const SIP_TCP: &str = "_sip._tcp.example.com.";
const SIP1: &str = "sip1.example.com.";

fn sip_srv_response() -> DnsMessage {
    DnsMessage::new(
        vec![srv(SIP_TCP, 0, 5, 5060, SIP1)],
        vec![glue(SIP1, "192.0.2.1")],
    )
}

fn scripted() -> MockDns {
    let record = naptr("example.com.", 10, 50, "s", "SIP+D2T", SIP_TCP);
    let bare = "_sip._tcp.example.com";
    MockDns::new()
        .respond("example.com", RecordType::NAPTR, answers(vec![record]))
        .respond(SIP_TCP, RecordType::SRV, sip_srv_response())
        .respond(bare, RecordType::SRV, sip_srv_response())
}

#[tokio::test]
async fn discover_runs_naptr_and_srv_lookups() {
    let config = ProbeConfig::default()
        .service_names(["_sip._tcp", "_xmpp-client._tcp"]);
    let prober = Prober::new(scripted(), config);

    let report = prober.discover("example.com").await;
    assert_eq!(report.domain, "example.com");
    assert_eq!(report.naptr.present().map(|r| r.len()), Some(1));

    let srv = report.srv.present().unwrap();
    let names: Vec<_> = srv.service_names().collect();
    assert_eq!(names, ["_sip._tcp"]);
    assert_eq!(report.instance_count(), 2);
    assert_eq!(prober.client().check_count(), 0);
}

#[tokio::test]
async fn discover_unknown_domain() {
    let prober = Prober::new(scripted(), ProbeConfig::default());

    let report = prober.discover("example.net").await;
    assert_eq!(report.naptr, Probe::Absent);
    assert_eq!(report.srv, Probe::Absent);
    assert!(report.is_empty());
}

#[test]
fn discover_all_keeps_input_order() {
    let config = ProbeConfig::default()
        .service_names(["_sip._tcp"])
        .validate(true)
        .concurrency(4);
    let prober = Prober::new(scripted(), config);

    let domains = ["example.net", "example.com"];
    let reports = tokio_test::block_on(prober.discover_all(domains));
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].domain, "example.net");
    assert!(reports[0].is_empty());
    assert_eq!(reports[1].domain, "example.com");

    let naptr = reports[1].naptr.present().unwrap();
    assert!(naptr.records[0].validation.is_some());
}

#[test]
fn report_serializes_absent_results_as_null() {
    let prober = Prober::new(scripted(), ProbeConfig::default());
    let report = tokio_test::block_on(prober.discover("example.net"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["domain"], "example.net");
    assert!(json["naptr"].is_null());
    assert!(json["srv"].is_null());
}
