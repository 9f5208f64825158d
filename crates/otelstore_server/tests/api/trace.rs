use crate::common::{setup_test, str_kv};
use opentelemetry_proto::tonic::collector::trace::v1::ExportTraceServiceRequest;
use opentelemetry_proto::tonic::resource::v1::Resource;
use opentelemetry_proto::tonic::trace::v1::span::Event;
use opentelemetry_proto::tonic::trace::v1::{ResourceSpans, ScopeSpans, Span};
use std::sync::atomic::Ordering;
use tonic::Code;

fn span(span_byte: u8, parent: Vec<u8>, events: usize) -> Span {
    Span {
        trace_id: vec![0xAA; 16],
        span_id: vec![span_byte; 8],
        parent_span_id: parent,
        name: format!("span-{span_byte}"),
        start_time_unix_nano: 1_700_000_000_000_000_000,
        end_time_unix_nano: 1_700_000_000_500_000_000,
        attributes: vec![str_kv("http.method", "GET")],
        events: (0..events)
            .map(|i| Event {
                time_unix_nano: 1_700_000_000_100_000_000 + i as u64,
                name: format!("event-{i}"),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn request(spans: Vec<Span>) -> ExportTraceServiceRequest {
    ExportTraceServiceRequest {
        resource_spans: vec![ResourceSpans {
            resource: Some(Resource {
                attributes: vec![str_kv("service.name", "worker")],
                ..Default::default()
            }),
            scope_spans: vec![ScopeSpans {
                spans,
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

#[tokio::test]
async fn test_grpc_export_spans() {
    let helper = setup_test().await;
    let mut client = helper.trace_client().await;

    let response = client
        .export(request(vec![
            span(0x01, vec![], 2),
            span(0x02, vec![0x01; 8], 1),
        ]))
        .await
        .unwrap()
        .into_inner();

    assert!(response.partial_success.is_none());

    let spans = helper.writer.spans.lock().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].trace_id.to_hex(), "aa".repeat(16));
    assert!(spans[0].parent_span_id.is_none());
    assert_eq!(spans[1].parent_span_id.unwrap().to_hex(), "01".repeat(8));
    assert_eq!(spans[0].attributes.len(), 2);

    let events = helper.writer.events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].event_no, 1);
}

#[tokio::test]
async fn test_grpc_export_malformed_span_is_rejected() {
    let helper = setup_test().await;
    let mut client = helper.trace_client().await;

    let mut bad = span(0x02, vec![], 0);
    bad.span_id = vec![0x02; 3];

    let status = client
        .export(request(vec![span(0x01, vec![], 1), bad]))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(helper.writer.spans.lock().unwrap().is_empty());
    assert!(helper.writer.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_grpc_export_storage_unavailable() {
    let helper = setup_test().await;
    helper.writer.unavailable.store(true, Ordering::SeqCst);
    let mut client = helper.trace_client().await;

    let status = client
        .export(request(vec![span(0x01, vec![], 0)]))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
}

#[tokio::test]
async fn test_grpc_export_empty_request() {
    let helper = setup_test().await;
    let mut client = helper.trace_client().await;

    let response = client
        .export(ExportTraceServiceRequest::default())
        .await
        .unwrap()
        .into_inner();

    assert!(response.partial_success.is_none());
    assert!(helper.writer.spans.lock().unwrap().is_empty());
}
